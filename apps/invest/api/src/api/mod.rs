//! API routes module
//!
//! Wires domain routers into the HTTP surface. Routes are mounted at the root
//! by `axum_helpers::create_router`.

pub mod recommendations;

use axum::Router;

use crate::config::Config;

/// Create all API routes
pub fn routes(config: &Config) -> Router {
    Router::new().merge(recommendations::router(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use crate::openapi::ApiDoc;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_helpers::server::{create_router, health_router};
    use core_config::{AppInfo, server::ServerConfig};
    use domain_recommendations::{ListingSourceConfig, MarketConfig};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_config() -> Config {
        Config {
            app: AppInfo {
                name: "invest_api",
                version: "0.1.0",
            },
            server: ServerConfig::default(),
            market: MarketConfig::default(),
            listings: ListingSourceConfig::default(),
            environment: Environment::Development,
        }
    }

    fn app() -> Router {
        let config = test_config();
        let router = temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            create_router::<ApiDoc>(routes(&config), &config.environment).unwrap()
        });
        router.merge(health_router(config.app))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_recommendations_served_at_root() {
        let (status, body) = get(app(), "/recommendations?location=Downtown").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["market_stats"]["average_price_sqft"], 2200.0);
        assert_eq!(body["top_investments"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (status, body) = get(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["name"], "invest_api");
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let (status, body) = get(app(), "/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["info"]["title"], "Dubai Invest - Recommendations");
        assert!(body["paths"]["/recommendations"]["get"].is_object());
    }

    #[tokio::test]
    async fn test_unknown_route_returns_detail() {
        let (status, body) = get(app(), "/api/recommendations").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Not Found");
    }

    #[tokio::test]
    async fn test_configured_default_average_applies() {
        let mut config = test_config();
        config.market.default_average_price_sqft = 1750.0;

        let (status, body) = get(routes(&config), "/recommendations?location=Al%20Barsha").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["market_stats"]["average_price_sqft"], 1750.0);
    }
}
