use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::error::{RecommendationError, RecommendationResult};
use crate::listings::ListingSource;
use crate::market::MarketDataProvider;
use crate::models::{
    DEFAULT_PROPERTY_TYPE, Listing, MarketStats, RawListing, RecommendationsResponse, round2,
};

/// Maximum number of listings returned per request
pub const MAX_RECOMMENDATIONS: usize = 4;

/// Ranks listings for a location by discount versus the market average
pub struct RecommendationService<M: MarketDataProvider, L: ListingSource> {
    market: Arc<M>,
    listings: Arc<L>,
}

impl<M: MarketDataProvider, L: ListingSource> Clone for RecommendationService<M, L> {
    fn clone(&self) -> Self {
        Self {
            market: Arc::clone(&self.market),
            listings: Arc::clone(&self.listings),
        }
    }
}

impl<M: MarketDataProvider, L: ListingSource> RecommendationService<M, L> {
    pub fn new(market: M, listings: L) -> Self {
        Self {
            market: Arc::new(market),
            listings: Arc::new(listings),
        }
    }

    /// Best deals for `location`: at most [`MAX_RECOMMENDATIONS`] listings
    /// priced below the market average, highest discount first.
    ///
    /// Fails with [`RecommendationError::InvalidConfiguration`] when the
    /// market average is not positive; listings are not fetched in that case.
    #[instrument(skip(self))]
    pub async fn compute_recommendations(
        &self,
        location: &str,
    ) -> RecommendationResult<RecommendationsResponse> {
        let market_average = self
            .market
            .average_price_sqft(location, DEFAULT_PROPERTY_TYPE)
            .await?;

        // NaN fails this check too.
        if !(market_average > 0.0) {
            return Err(RecommendationError::InvalidConfiguration {
                average_price_sqft: market_average,
            });
        }

        let raw_listings = self.listings.fetch_listings(location).await?;
        let candidates = raw_listings.len();

        let processed: Vec<Listing> = raw_listings
            .into_iter()
            .filter_map(|raw| evaluate_listing(raw, market_average))
            .collect();
        debug!(
            candidates,
            below_market = processed.len(),
            market_average,
            "Evaluated listings"
        );

        let top_investments = rank_listings(processed);
        info!(
            returned = top_investments.len(),
            market_average, "Computed recommendations"
        );

        Ok(RecommendationsResponse {
            market_stats: MarketStats {
                average_price_sqft: market_average,
            },
            top_investments,
        })
    }
}

/// Prices a listing against `market_average`.
///
/// Returns `None` for listings with a non-positive area or no discount. The
/// checks use unrounded values; only the returned metrics are rounded.
pub fn evaluate_listing(raw: RawListing, market_average: f64) -> Option<Listing> {
    if !(raw.area_sqft > 0.0) {
        return None;
    }

    let price_per_sqft = raw.price / raw.area_sqft;
    let discount = market_average - price_per_sqft;
    let discount_percentage = discount / market_average * 100.0;
    if !(discount_percentage > 0.0) {
        return None;
    }
    let potential_gain = discount * raw.area_sqft;

    Some(Listing {
        title: raw.title,
        price: raw.price,
        area_sqft: raw.area_sqft,
        url: raw.url,
        image_url: raw.image_url,
        price_per_sqft: round2(price_per_sqft),
        discount_percentage: round2(discount_percentage),
        potential_gain: round2(potential_gain),
    })
}

/// Sorts by discount descending and keeps the first [`MAX_RECOMMENDATIONS`].
///
/// The sort is stable: equal discounts keep their source order.
pub fn rank_listings(mut listings: Vec<Listing>) -> Vec<Listing> {
    listings.sort_by(|a, b| b.discount_percentage.total_cmp(&a.discount_percentage));
    listings.truncate(MAX_RECOMMENDATIONS);
    listings
}
