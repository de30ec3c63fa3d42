//! HTTP adapters for the orders, alert, and update endpoints

pub mod alerts;
pub mod client;
pub mod orders;
pub mod updates;

pub use alerts::HttpNotifier;
pub use client::EndpointClient;
pub use orders::{decode_orders, HttpOrderRepository};
pub use updates::HttpUpdatePublisher;
