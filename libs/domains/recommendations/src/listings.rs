//! Listing sources.
//!
//! [`SyntheticListingSource`] synthesizes a deterministic page of listings. A real
//! property-portal client implements [`ListingSource`] with the same shape.

use async_trait::async_trait;
use core_config::{ConfigError, FromEnv, env_or_default};

use crate::error::RecommendationResult;
use crate::models::RawListing;

/// Number of listings the mock source returns per location
pub const LISTINGS_PER_LOCATION: usize = 10;

pub const DEFAULT_SEARCH_URL: &str = "https://www.propertyfinder.ae/en/search";
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1505693416388-ac5ce068fe85";

/// Provider of candidate listings for a location
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch_listings(&self, location: &str) -> RecommendationResult<Vec<RawListing>>;
}

/// URLs used to build listing links
#[derive(Clone, Debug, PartialEq)]
pub struct ListingSourceConfig {
    pub search_url: String,
    pub image_url: String,
}

impl Default for ListingSourceConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
        }
    }
}

impl FromEnv for ListingSourceConfig {
    /// Reads `LISTINGS_SEARCH_URL` and `LISTINGS_IMAGE_URL`.
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            search_url: env_or_default("LISTINGS_SEARCH_URL", DEFAULT_SEARCH_URL),
            image_url: env_or_default("LISTINGS_IMAGE_URL", DEFAULT_IMAGE_URL),
        })
    }
}

/// Deterministic stand-in for a live listings provider.
#[derive(Debug, Clone, Default)]
pub struct SyntheticListingSource {
    config: ListingSourceConfig,
}

impl SyntheticListingSource {
    pub fn new(config: ListingSourceConfig) -> Self {
        Self { config }
    }

    /// Generates [`LISTINGS_PER_LOCATION`] listings for `location`.
    ///
    /// Prices alternate between two ladders by index parity and areas grow
    /// linearly, so every call for the same location yields the same page.
    pub fn generate_listings(&self, location: &str) -> Vec<RawListing> {
        let search_term = search_term(location);

        (0..LISTINGS_PER_LOCATION)
            .map(|i| RawListing {
                title: format!("{} | Unit #{}", location, i + 1),
                price: listing_price(i),
                area_sqft: listing_area(i),
                url: format!(
                    "{}?l={}&listing={}",
                    self.config.search_url,
                    search_term,
                    i + 1
                ),
                image_url: format!(
                    "{}?q=80&w=1200&auto=format&fit=crop&sig={}",
                    self.config.image_url, i
                ),
            })
            .collect()
    }
}

#[async_trait]
impl ListingSource for SyntheticListingSource {
    async fn fetch_listings(&self, location: &str) -> RecommendationResult<Vec<RawListing>> {
        Ok(self.generate_listings(location))
    }
}

/// Even index: 900k + 150k·i. Odd index: 650k + 90k·i.
fn listing_price(i: usize) -> f64 {
    let step = i as f64;
    if i % 2 == 0 {
        900_000.0 + step * 150_000.0
    } else {
        650_000.0 + step * 90_000.0
    }
}

fn listing_area(i: usize) -> f64 {
    650.0 + i as f64 * 35.0
}

/// Spaces become `+`, everything else is percent-encoded.
fn search_term(location: &str) -> String {
    location
        .split(' ')
        .map(|part| urlencoding::encode(part).into_owned())
        .collect::<Vec<_>>()
        .join("+")
}
