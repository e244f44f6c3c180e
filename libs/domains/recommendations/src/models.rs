use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Property type assumed when the caller does not specify one
pub const DEFAULT_PROPERTY_TYPE: &str = "apartment";

/// Normalizes a free-text location into a lookup key (trimmed, lower-cased).
pub fn normalize_location(location: &str) -> String {
    location.trim().to_lowercase()
}

/// Rounds to two decimal places, half away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Candidate listing as delivered by a listing source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RawListing {
    pub title: String,
    /// Asking price in AED
    pub price: f64,
    pub area_sqft: f64,
    pub url: String,
    pub image_url: String,
}

/// Listing priced against the market average
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Listing {
    pub title: String,
    /// Asking price in AED
    pub price: f64,
    pub area_sqft: f64,
    pub url: String,
    pub image_url: String,
    /// Asking price divided by area, 2 dp
    pub price_per_sqft: f64,
    /// Discount versus the market average price per sqft, in percent, 2 dp
    pub discount_percentage: f64,
    /// Discount per sqft applied to the full area, in AED, 2 dp
    pub potential_gain: f64,
}

/// Market statistics the ranking was computed against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MarketStats {
    /// Average price per sqft (AED) for the requested location
    pub average_price_sqft: f64,
}

/// Response of `GET /recommendations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendationsResponse {
    pub market_stats: MarketStats,
    /// At most four listings, best discount first
    pub top_investments: Vec<Listing>,
}

/// Query parameters for `GET /recommendations`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecommendationQuery {
    /// Location to search, e.g. "Dubai Marina"
    #[validate(length(min = 2))]
    #[param(min_length = 2, example = "Dubai Marina")]
    pub location: String,
}
