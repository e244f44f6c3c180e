//! Market average price per sqft, by location.

use async_trait::async_trait;
use core_config::{ConfigError, FromEnv, env_parse_or};
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::RecommendationResult;
use crate::models::normalize_location;

/// Average used for locations missing from the table (AED/sqft)
pub const DEFAULT_AVERAGE_PRICE_SQFT: f64 = 1400.0;

/// Known Dubai averages in AED/sqft, keyed by normalized location
pub const DUBAI_AVERAGES: [(&str, f64); 5] = [
    ("dubai marina", 1600.0),
    ("downtown", 2200.0),
    ("downtown dubai", 2200.0),
    ("business bay", 1500.0),
    ("jlt", 1200.0),
];

/// Source of market average prices.
///
/// The static table is the only implementation today; a DLD feed or database
/// lookup plugs in here without touching the service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Average price per sqft for `location`. `property_type` is reserved and
    /// currently ignored.
    async fn average_price_sqft(
        &self,
        location: &str,
        property_type: &str,
    ) -> RecommendationResult<f64>;
}

/// Settings for [`StaticMarketAverages`]
#[derive(Clone, Debug, PartialEq)]
pub struct MarketConfig {
    pub default_average_price_sqft: f64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            default_average_price_sqft: DEFAULT_AVERAGE_PRICE_SQFT,
        }
    }
}

impl FromEnv for MarketConfig {
    /// Reads `MARKET_DEFAULT_AVERAGE_SQFT` (default 1400.0).
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            default_average_price_sqft: env_parse_or(
                "MARKET_DEFAULT_AVERAGE_SQFT",
                DEFAULT_AVERAGE_PRICE_SQFT,
            )?,
        })
    }
}

/// Immutable location → average table built once at startup.
///
/// Cloning shares the table.
#[derive(Debug, Clone)]
pub struct StaticMarketAverages {
    averages: Arc<HashMap<String, f64>>,
    default_average: f64,
}

impl StaticMarketAverages {
    /// Builds a table from arbitrary entries. Keys are normalized on insert.
    pub fn new<I, K>(entries: I, default_average: f64) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let averages = entries
            .into_iter()
            .map(|(location, average)| (normalize_location(location.as_ref()), average))
            .collect();

        Self {
            averages: Arc::new(averages),
            default_average,
        }
    }

    /// The built-in Dubai table with the 1400.0 fallback.
    pub fn dubai() -> Self {
        Self::from_config(&MarketConfig::default())
    }

    /// The built-in Dubai table with the configured fallback.
    pub fn from_config(config: &MarketConfig) -> Self {
        Self::new(DUBAI_AVERAGES, config.default_average_price_sqft)
    }

    pub fn get_average(&self, location: &str, _property_type: &str) -> f64 {
        self.averages
            .get(&normalize_location(location))
            .copied()
            .unwrap_or(self.default_average)
    }

    pub fn default_average(&self) -> f64 {
        self.default_average
    }
}

#[async_trait]
impl MarketDataProvider for StaticMarketAverages {
    async fn average_price_sqft(
        &self,
        location: &str,
        property_type: &str,
    ) -> RecommendationResult<f64> {
        Ok(self.get_average(location, property_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_PROPERTY_TYPE;

    #[test]
    fn test_known_locations_return_table_values() {
        let market = StaticMarketAverages::dubai();
        for (location, expected) in DUBAI_AVERAGES {
            assert_eq!(market.get_average(location, DEFAULT_PROPERTY_TYPE), expected);
        }
    }

    #[test]
    fn test_lookup_ignores_case_and_whitespace() {
        let market = StaticMarketAverages::dubai();
        assert_eq!(market.get_average(" Downtown ", DEFAULT_PROPERTY_TYPE), 2200.0);
        assert_eq!(market.get_average("DUBAI MARINA", DEFAULT_PROPERTY_TYPE), 1600.0);
        assert_eq!(market.get_average("\tJlt\n", DEFAULT_PROPERTY_TYPE), 1200.0);
    }

    #[test]
    fn test_unknown_location_uses_default() {
        let market = StaticMarketAverages::dubai();
        assert_eq!(market.get_average("Unknown Area", DEFAULT_PROPERTY_TYPE), 1400.0);
        assert_eq!(market.get_average("", DEFAULT_PROPERTY_TYPE), 1400.0);
    }

    #[test]
    fn test_property_type_does_not_change_result() {
        let market = StaticMarketAverages::dubai();
        assert_eq!(
            market.get_average("business bay", "villa"),
            market.get_average("business bay", DEFAULT_PROPERTY_TYPE)
        );
    }

    #[test]
    fn test_custom_table_normalizes_keys() {
        let market = StaticMarketAverages::new([("  Palm Jumeirah ", 3100.0)], 900.0);
        assert_eq!(market.get_average("palm jumeirah", DEFAULT_PROPERTY_TYPE), 3100.0);
        assert_eq!(market.get_average("downtown", DEFAULT_PROPERTY_TYPE), 900.0);
        assert_eq!(market.default_average(), 900.0);
    }

    #[test]
    fn test_market_config_from_env() {
        temp_env::with_var_unset("MARKET_DEFAULT_AVERAGE_SQFT", || {
            assert_eq!(MarketConfig::from_env().unwrap(), MarketConfig::default());
        });

        temp_env::with_var("MARKET_DEFAULT_AVERAGE_SQFT", Some("1750"), || {
            let config = MarketConfig::from_env().unwrap();
            assert_eq!(config.default_average_price_sqft, 1750.0);
            let market = StaticMarketAverages::from_config(&config);
            assert_eq!(market.get_average("nowhere", DEFAULT_PROPERTY_TYPE), 1750.0);
            assert_eq!(market.get_average("jlt", DEFAULT_PROPERTY_TYPE), 1200.0);
        });

        temp_env::with_var("MARKET_DEFAULT_AVERAGE_SQFT", Some("cheap"), || {
            assert!(MarketConfig::from_env().is_err());
        });
    }

    #[tokio::test]
    async fn test_provider_trait_delegates_to_table() {
        let market = StaticMarketAverages::dubai();
        let average = market
            .average_price_sqft("Business Bay", DEFAULT_PROPERTY_TYPE)
            .await
            .unwrap();
        assert_eq!(average, 1500.0);
    }
}
