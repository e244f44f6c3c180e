//! Recommendations API routes
//!
//! Backs the recommendations domain with the static Dubai market table and the
//! synthetic listing source.

use axum::Router;
use domain_recommendations::{
    RecommendationService, StaticMarketAverages, SyntheticListingSource, handlers,
};
use tracing::warn;

use crate::config::Config;

/// Create recommendations router
pub fn router(config: &Config) -> Router {
    let market = StaticMarketAverages::from_config(&config.market);
    if market.default_average() <= 0.0 {
        warn!(
            default_average = market.default_average(),
            "MARKET_DEFAULT_AVERAGE_SQFT is not positive; unknown locations will be rejected"
        );
    }

    let listings = SyntheticListingSource::new(config.listings.clone());

    handlers::router(RecommendationService::new(market, listings))
}
