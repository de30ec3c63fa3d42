//! Domain models and types for Orderwatch.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`OrderId`])
//! - **Domain models** ([`Order`], [`Item`], [`DeliveryAlert`])
//! - **Error types** ([`OrderwatchError`], [`TransportError`], [`ProcessingError`])
//! - **Result type alias** ([`Result`])
//!
//! # Example
//!
//! ```rust
//! use orderwatch::domain::{Item, Order, OrderId};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let order = Order::new(
//!     OrderId::new("o11")?,
//!     vec![Item::new("Wheelchair", "Delivered", 1)],
//! );
//! assert_eq!(order.item_count(), Some(1));
//! # Ok(())
//! # }
//! ```

pub mod alert;
pub mod errors;
pub mod ids;
pub mod order;
pub mod result;

// Re-export commonly used types for convenience
pub use alert::{AlertPayload, DeliveryAlert};
pub use errors::{OrderwatchError, ProcessingError, TransportError};
pub use ids::OrderId;
pub use order::{Item, Order, DELIVERED_STATUS};
pub use result::Result;
