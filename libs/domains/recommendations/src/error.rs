use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Result type for recommendation operations
pub type RecommendationResult<T> = Result<T, RecommendationError>;

/// Errors that can occur while computing recommendations
#[derive(Debug, Error)]
pub enum RecommendationError {
    /// The resolved market average cannot be used as a divisor
    #[error("Market average price must be greater than zero.")]
    InvalidConfiguration { average_price_sqft: f64 },

    /// Market statistics provider failed
    #[error("Market data error: {0}")]
    MarketData(String),

    /// Listings provider failed
    #[error("Listing source error: {0}")]
    ListingSource(String),
}

impl From<RecommendationError> for AppError {
    fn from(err: RecommendationError) -> Self {
        match err {
            RecommendationError::InvalidConfiguration { .. } => {
                AppError::BadRequest(err.to_string())
            }
            RecommendationError::MarketData(_) | RecommendationError::ListingSource(_) => {
                AppError::BadGateway(err.to_string())
            }
        }
    }
}

impl IntoResponse for RecommendationError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_invalid_configuration_message_is_fixed() {
        let err = RecommendationError::InvalidConfiguration {
            average_price_sqft: -5.0,
        };
        assert_eq!(
            err.to_string(),
            "Market average price must be greater than zero."
        );
    }

    #[test]
    fn test_status_codes() {
        let bad_config = RecommendationError::InvalidConfiguration {
            average_price_sqft: 0.0,
        };
        assert_eq!(bad_config.into_response().status(), StatusCode::BAD_REQUEST);

        let upstream = RecommendationError::ListingSource("timeout".to_string());
        assert_eq!(upstream.into_response().status(), StatusCode::BAD_GATEWAY);

        let market = RecommendationError::MarketData("feed down".to_string());
        assert_eq!(market.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
