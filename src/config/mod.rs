//! Configuration management for Orderwatch.
//!
//! Orderwatch reads a TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `ORDERWATCH_<SECTION>_<KEY>` overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use orderwatch::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("orderwatch.toml")?;
//! println!("Orders API: {}", config.endpoints.orders_api_url);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [endpoints]
//! orders_api_url = "https://orders.example.com/api/orders"
//! alert_api_url = "https://alerts.example.com/api/alerts"
//! update_api_url = "https://orders.example.com/api/update"
//!
//! [http]
//! timeout_seconds = 30
//! auth_type = "bearer"
//! token = "${ORDERWATCH_API_TOKEN}"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, AuthType, EndpointsConfig, HttpConfig, LoggingConfig, OrderwatchConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
