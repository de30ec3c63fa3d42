//! Core business logic for Orderwatch.
//!
//! # Modules
//!
//! - [`processor`] - Applies the delivery rule to one order and fires alerts
//! - [`pipeline`] - Drives a full fetch → process → publish pass
//!
//! # Example
//!
//! ```rust,no_run
//! use orderwatch::adapters::create_services;
//! use orderwatch::config::load_config;
//! use orderwatch::core::pipeline::PipelineDriver;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("orderwatch.toml")?;
//! let services = create_services(&config, false)?;
//!
//! let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//! let summary = PipelineDriver::new(services, shutdown_rx).run().await;
//!
//! println!("Published: {}", summary.orders_published);
//! println!("Alerts sent: {}", summary.alerts_sent);
//! # Ok(())
//! # }
//! ```

pub mod pipeline;
pub mod processor;

#[cfg(test)]
pub(crate) mod testing;

pub use processor::{AlertTally, OrderProcessor, ProcessOutcome};
