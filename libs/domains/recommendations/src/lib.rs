//! Recommendations Domain
//!
//! Ranks property listings in a location by how far their price per sqft sits
//! below the market average, and serves the best four over HTTP.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← GET /recommendations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Pricing, filtering, ranking
//! └──────┬──────┘
//!        │
//! ┌──────▼──────────────────────────┐
//! │ MarketDataProvider │ ListingSource │  ← Data sources (trait + implementations)
//! └──────┬──────────────────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Listings, response DTOs, query
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_recommendations::{
//!     handlers,
//!     listings::SyntheticListingSource,
//!     market::StaticMarketAverages,
//!     service::RecommendationService,
//! };
//!
//! let service = RecommendationService::new(
//!     StaticMarketAverages::dubai(),
//!     SyntheticListingSource::default(),
//! );
//!
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod listings;
pub mod market;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use error::{RecommendationError, RecommendationResult};
pub use listings::{ListingSource, ListingSourceConfig, SyntheticListingSource};
pub use market::{MarketConfig, MarketDataProvider, StaticMarketAverages};
pub use models::{Listing, MarketStats, RawListing, RecommendationQuery, RecommendationsResponse};
pub use service::RecommendationService;
