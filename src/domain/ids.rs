//! Domain identifier types with validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order identifier newtype wrapper
///
/// Wire payloads carry the identifier as a plain string (`"OrderId": "o11"`);
/// decoding rejects empty or whitespace-only identifiers.
///
/// # Examples
///
/// ```
/// use orderwatch::domain::ids::OrderId;
/// use std::str::FromStr;
///
/// let order_id = OrderId::from_str("o11").unwrap();
/// assert_eq!(order_id.as_str(), "o11");
/// assert!(OrderId::from_str("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderId(String);

impl OrderId {
    /// Creates a new OrderId, rejecting empty identifiers
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Order ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the order ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for OrderId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_valid() {
        let id = OrderId::new("o99").unwrap();
        assert_eq!(id.as_str(), "o99");
        assert_eq!(id.to_string(), "o99");
        assert_eq!(String::from(id), "o99");
    }

    #[test]
    fn test_order_id_rejects_blank() {
        assert!(OrderId::new("").is_err());
        assert!(OrderId::new("   ").is_err());
    }

    #[test]
    fn test_order_id_serde_is_transparent_string() {
        let id: OrderId = serde_json::from_str("\"o25\"").unwrap();
        assert_eq!(id.as_str(), "o25");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"o25\"");
    }

    #[test]
    fn test_order_id_serde_rejects_blank() {
        assert!(serde_json::from_str::<OrderId>("\"\"").is_err());
    }
}
