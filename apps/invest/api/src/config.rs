use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use domain_recommendations::{ListingSourceConfig, MarketConfig};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub market: MarketConfig,
    pub listings: ListingSourceConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let market = MarketConfig::from_env()?;
        let listings = ListingSourceConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            server,
            market,
            listings,
            environment,
        })
    }
}
