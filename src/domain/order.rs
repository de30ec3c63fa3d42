//! Order and item models
//!
//! Orders arrive as JSON documents from the orders API:
//!
//! ```json
//! {
//!   "OrderId": "o11",
//!   "Items": [
//!     { "Description": "Wheelchair", "Status": "Delivered", "deliveryNotification": 1 }
//!   ]
//! }
//! ```
//!
//! `Items` and `Status` stay optional in the typed form so that a missing field can be
//! reported by the processor instead of being silently defaulted. Fields the pipeline
//! does not interpret are kept in `extra` and written back unchanged on update.

use super::ids::OrderId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Status value that marks an item as delivered (compared case-insensitively)
pub const DELIVERED_STATUS: &str = "Delivered";

/// A medical-equipment order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier, unique within a batch
    #[serde(rename = "OrderId")]
    pub id: OrderId,

    /// Line items in insertion order; `None` when the field is absent or null
    ///
    /// An absent and a null `Items` both decode to `None`, and `None` is
    /// written back without the key, so `"Items": null` is published as an
    /// order with no `Items` field.
    #[serde(rename = "Items", default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,

    /// Fields not interpreted by the pipeline
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Order {
    /// Create an order with the given items
    pub fn new(id: OrderId, items: Vec<Item>) -> Self {
        Self {
            id,
            items: Some(items),
            extra: Map::new(),
        }
    }

    /// Create an order whose item sequence is missing
    pub fn without_items(id: OrderId) -> Self {
        Self {
            id,
            items: None,
            extra: Map::new(),
        }
    }

    /// Number of items, or `None` if the item sequence is missing
    pub fn item_count(&self) -> Option<usize> {
        self.items.as_ref().map(Vec::len)
    }

    /// Positions of items whose description is missing or blank
    pub fn undescribed_items(&self) -> Vec<usize> {
        self.items
            .iter()
            .flatten()
            .enumerate()
            .filter(|(_, item)| item.description.trim().is_empty())
            .map(|(position, _)| position)
            .collect()
    }
}

/// A single line within an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display description; empty when absent, which the decoder warns about
    #[serde(rename = "Description", default)]
    pub description: String,

    /// Delivery status; `None` when absent from the payload
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Number of delivery alerts sent so far
    #[serde(rename = "deliveryNotification", default)]
    pub delivery_notification: u32,

    /// Fields not interpreted by the pipeline
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Create an item with a status
    pub fn new(
        description: impl Into<String>,
        status: impl Into<String>,
        delivery_notification: u32,
    ) -> Self {
        Self {
            description: description.into(),
            status: Some(status.into()),
            delivery_notification,
            extra: Map::new(),
        }
    }

    /// Whether the status reads "Delivered", ignoring case
    ///
    /// Returns `None` when the item carries no status. No trimming or other
    /// normalization is applied.
    pub fn is_delivered(&self) -> Option<bool> {
        self.status
            .as_deref()
            .map(|status| status.eq_ignore_ascii_case(DELIVERED_STATUS))
    }

    /// Add one to the delivery notification counter
    pub fn increment_delivery_notification(&mut self) {
        self.delivery_notification = self.delivery_notification.saturating_add(1);
    }
}
