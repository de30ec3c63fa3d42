//! Delivery alert model

use super::ids::OrderId;
use super::order::Item;
use serde::Serialize;

/// Alert raised for a delivered item
///
/// Carries the notification count as it was *before* the processor incremented it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryAlert {
    /// Owning order
    pub order_id: OrderId,

    /// Item description
    pub description: String,

    /// Delivery notification count at the time the alert was raised
    pub delivery_notification: u32,
}

impl DeliveryAlert {
    /// Build an alert for an item of the given order
    pub fn for_item(order_id: &OrderId, item: &Item) -> Self {
        Self {
            order_id: order_id.clone(),
            description: item.description.clone(),
            delivery_notification: item.delivery_notification,
        }
    }

    /// Human-readable alert text
    pub fn message(&self) -> String {
        format!(
            "Alert for delivered item: Order {}, Item: {}, Delivery Notifications: {}",
            self.order_id, self.description, self.delivery_notification
        )
    }

    /// Body posted to the alert endpoint
    pub fn payload(&self) -> AlertPayload {
        AlertPayload {
            message: self.message(),
        }
    }
}

/// JSON body of an alert request
#[derive(Debug, Clone, Serialize)]
pub struct AlertPayload {
    #[serde(rename = "Message")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_alert_uses_pre_increment_count() {
        let order_id = OrderId::from_str("o11").unwrap();
        let mut item = Item::new("Wheelchair", "Delivered", 1);
        let alert = DeliveryAlert::for_item(&order_id, &item);
        item.increment_delivery_notification();

        assert_eq!(alert.delivery_notification, 1);
        assert_eq!(item.delivery_notification, 2);
    }

    #[test]
    fn test_alert_message_and_payload() {
        let order_id = OrderId::from_str("o25").unwrap();
        let alert = DeliveryAlert::for_item(&order_id, &Item::new("Test Strips", "Delivered", 0));

        assert_eq!(
            alert.message(),
            "Alert for delivered item: Order o25, Item: Test Strips, Delivery Notifications: 0"
        );

        let json = serde_json::to_value(alert.payload()).unwrap();
        assert_eq!(json["Message"], alert.message());
    }
}
