//! Server infrastructure module.
//!
//! - Router setup with OpenAPI documentation and shared middleware
//! - Health endpoint
//! - Graceful shutdown
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig, Environment};
//! use std::time::Duration;
//!
//! let router = create_router::<ApiDoc>(api_routes, &Environment::from_env())?;
//! let app = router.merge(health_router(app_info!()));
//! create_app(app, &ServerConfig::default(), Duration::from_secs(30)).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_router};
pub use health::{HealthResponse, health_router};
pub use shutdown::shutdown_signal;
