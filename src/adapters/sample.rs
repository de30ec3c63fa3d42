//! Built-in sample batch
//!
//! Serves the three demonstration orders that the upstream orders service
//! used to return from its mocked endpoint. Handy for trying the pipeline
//! without an orders API.

use crate::adapters::http::decode_orders;
use crate::adapters::traits::{FetchedBatch, OrderRepository};
use crate::domain::Order;
use async_trait::async_trait;
use serde_json::json;

/// In-memory repository returning a fixed batch
#[derive(Debug, Clone)]
pub struct SampleOrderRepository {
    orders: Vec<Order>,
}

impl SampleOrderRepository {
    /// Repository serving the built-in demonstration batch
    pub fn new() -> Self {
        Self {
            orders: sample_orders(),
        }
    }
}

impl Default for SampleOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for SampleOrderRepository {
    async fn fetch_orders(&self) -> FetchedBatch {
        tracing::info!(count = self.orders.len(), "Serving sample orders");
        FetchedBatch::from_orders(self.orders.clone())
    }
}

/// The demonstration batch: o11, o99 and o25
pub fn sample_orders() -> Vec<Order> {
    let batch = decode_orders(vec![
        json!({
            "OrderId": "o11",
            "Items": [
                {"Description": "Wheelchair", "Status": "Delivered", "deliveryNotification": 1},
                {"Description": "Test Strips", "Status": "Not delivered", "deliveryNotification": 0}
            ]
        }),
        json!({
            "OrderId": "o99",
            "Items": [
                {"Description": "Oxygen", "Status": "Not Delivered", "deliveryNotification": 1},
                {"Description": "CPAP", "Status": "Not delivered", "deliveryNotification": 0}
            ]
        }),
        json!({
            "OrderId": "o25",
            "Items": [
                {"Description": "Syringe", "Status": "Delivered", "deliveryNotification": 1},
                {"Description": "Test Strips", "Status": "Delivered", "deliveryNotification": 0}
            ]
        }),
    ]);
    batch.orders
}
