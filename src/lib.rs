// Orderwatch - Delivery alerts for medical-equipment orders
// Copyright (c) 2025 Orderwatch Contributors
// Licensed under the MIT License

//! # Orderwatch - Delivery alerts for medical-equipment orders
//!
//! Orderwatch fetches a batch of pending orders, raises an alert for every item
//! whose status reads "Delivered", bumps that item's delivery notification
//! counter and pushes each processed order back to the orders service.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Order processing and the single-pass pipeline
//! - [`adapters`] - Orders, alert and update endpoints behind service traits
//! - [`domain`] - Orders, items, alerts and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use orderwatch::adapters::create_services;
//! use orderwatch::config::load_config;
//! use orderwatch::core::pipeline::PipelineDriver;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("orderwatch.toml")?;
//!     let services = create_services(&config, false)?;
//!
//!     let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//!     let summary = PipelineDriver::new(services, shutdown_rx).run().await;
//!
//!     println!("Published {} orders", summary.orders_published);
//!     std::process::exit(summary.exit_code());
//! }
//! ```
//!
//! ## The delivery rule
//!
//! An item counts as delivered when its status equals `"Delivered"` ignoring
//! ASCII case. For each delivered item the alert carries the counter value
//! *before* the increment. The rule is not idempotent: running the same
//! orders twice raises two alerts and adds two to the counter.
//!
//! ```rust
//! use orderwatch::domain::{Item, OrderId, Order};
//!
//! let order = Order::new(
//!     OrderId::new("o11").unwrap(),
//!     vec![Item::new("Wheelchair", "DELIVERED", 1)],
//! );
//! assert_eq!(order.items.unwrap()[0].is_delivered(), Some(true));
//! ```
//!
//! ## Error Handling
//!
//! Library errors are [`domain::OrderwatchError`]. Per-order problems never
//! abort a run; they are collected in the
//! [`RunSummary`](core::pipeline::RunSummary).
//!
//! ```rust,no_run
//! use orderwatch::domain::OrderwatchError;
//!
//! fn example() -> Result<(), OrderwatchError> {
//!     let config = orderwatch::config::load_config("orderwatch.toml")?;
//!     println!("{}", config.endpoints.orders_api_url);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
