//! Orders API client

use super::client::EndpointClient;
use crate::adapters::traits::{DroppedDocument, FetchedBatch, OrderRepository};
use crate::config::HttpConfig;
use crate::domain::{Order, Result, TransportError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashSet;

/// Fetches pending orders from the orders API
///
/// # Example
///
/// ```no_run
/// use orderwatch::adapters::http::HttpOrderRepository;
/// use orderwatch::adapters::OrderRepository;
/// use orderwatch::config::HttpConfig;
///
/// # async fn example() -> orderwatch::domain::Result<()> {
/// let repository = HttpOrderRepository::new("https://orders.example.com/api/orders", &HttpConfig::default())?;
/// let batch = repository.fetch_orders().await;
/// if let Some(error) = &batch.fetch_error {
///     eprintln!("Fetch failed: {error}");
/// }
/// println!("Fetched {} orders", batch.orders.len());
/// # Ok(())
/// # }
/// ```
pub struct HttpOrderRepository {
    endpoint: EndpointClient,
}

impl HttpOrderRepository {
    /// Create a repository for the given orders endpoint
    pub fn new(url: impl Into<String>, config: &HttpConfig) -> Result<Self> {
        Ok(Self {
            endpoint: EndpointClient::new(url, config)?,
        })
    }

    async fn try_fetch(&self) -> Result<FetchedBatch> {
        let url = self.endpoint.url();

        let resp = self.endpoint.get().send().await.map_err(|e| {
            TransportError::RequestFailed {
                endpoint: url.to_string(),
                message: e.to_string(),
            }
        })?;

        if !resp.status().is_success() {
            return Err(TransportError::UnexpectedStatus {
                endpoint: url.to_string(),
                status: resp.status().as_u16(),
            }
            .into());
        }

        let documents = resp.json::<Vec<Value>>().await.map_err(|e| {
            TransportError::InvalidResponse {
                endpoint: url.to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(decode_orders(documents))
    }
}

#[async_trait]
impl OrderRepository for HttpOrderRepository {
    async fn fetch_orders(&self) -> FetchedBatch {
        tracing::debug!(url = %self.endpoint.url(), "Fetching orders");

        match self.try_fetch().await {
            Ok(batch) => {
                tracing::info!(
                    count = batch.orders.len(),
                    dropped = batch.dropped.len(),
                    "Fetched orders from API"
                );
                batch
            }
            Err(e) => {
                tracing::error!(
                    url = %self.endpoint.url(),
                    error = %e,
                    "Failed to fetch orders from API"
                );
                FetchedBatch::failed(e.to_string())
            }
        }
    }
}

/// Decode order documents one at a time
///
/// A document that fails to decode (for example a blank `OrderId` or a negative
/// notification count on one of its items) is logged and listed in
/// [`FetchedBatch::dropped`]; the rest of the batch is kept.
pub fn decode_orders(documents: Vec<Value>) -> FetchedBatch {
    let mut batch = FetchedBatch::from_orders(Vec::with_capacity(documents.len()));
    let mut seen = HashSet::new();

    for (index, document) in documents.into_iter().enumerate() {
        let order_id = document
            .get("OrderId")
            .and_then(Value::as_str)
            .map(str::to_string);

        match serde_json::from_value::<Order>(document) {
            Ok(order) => {
                if !seen.insert(order.id.clone()) {
                    tracing::warn!(order_id = %order.id, "Duplicate order ID in batch");
                }
                for position in order.undescribed_items() {
                    tracing::warn!(order_id = %order.id, position, "Item has no description");
                }
                batch.orders.push(order);
            }
            Err(e) => {
                tracing::error!(
                    index,
                    order_id = order_id.as_deref().unwrap_or(""),
                    error = %e,
                    "Dropping order that could not be decoded"
                );
                batch.dropped.push(DroppedDocument {
                    index,
                    order_id,
                    reason: e.to_string(),
                });
            }
        }
    }

    batch
}
