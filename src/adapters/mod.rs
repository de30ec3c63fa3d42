//! External system integrations for Orderwatch.
//!
//! - [`traits`] - The [`OrderRepository`], [`Notifier`], and [`UpdatePublisher`] seams
//! - [`http`] - reqwest-backed implementations for the orders, alert, and update APIs
//! - [`dry_run`] - Logging sinks used in dry-run mode
//! - [`sample`] - In-memory repository serving the built-in sample batch
//! - [`factory`] - Chooses implementations from configuration
//!
//! # Example
//!
//! ```rust,no_run
//! use orderwatch::adapters::create_services;
//! use orderwatch::config::load_config;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("orderwatch.toml")?;
//! let services = create_services(&config, false)?;
//! let batch = services.repository.fetch_orders().await;
//! println!("{} orders, {} dropped", batch.orders.len(), batch.dropped.len());
//! # Ok(())
//! # }
//! ```

pub mod dry_run;
pub mod factory;
pub mod http;
pub mod sample;
pub mod traits;

pub use factory::{create_services, PipelineServices};
pub use traits::{
    DroppedDocument, FetchedBatch, Notifier, OrderRepository, SendOutcome, UpdatePublisher,
};
