//! Crate-wide `Result` alias

use super::errors::OrderwatchError;

/// Result of a fallible Orderwatch operation
///
/// Per-order problems are not reported through this type; they end up in the
/// run summary. This is for failures that stop an operation outright, such as
/// bad configuration or an HTTP client that cannot be built.
///
/// ```
/// use orderwatch::domain::{OrderId, OrderwatchError, Result};
///
/// fn parse_id(raw: &str) -> Result<OrderId> {
///     OrderId::new(raw).map_err(|e| OrderwatchError::Validation(e.to_string()))
/// }
///
/// assert!(parse_id("o11").is_ok());
/// assert!(parse_id("  ").is_err());
/// ```
pub type Result<T> = std::result::Result<T, OrderwatchError>;
