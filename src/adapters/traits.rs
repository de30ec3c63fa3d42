//! Service traits for the remote collaborators of the pipeline
//!
//! The pipeline only talks to the outside world through these three traits.
//! None of them return errors: failures are logged by the implementation and
//! reported back as a [`SendOutcome`] or inside a [`FetchedBatch`].

use crate::domain::{DeliveryAlert, Order};
use async_trait::async_trait;

/// Outcome of a one-way remote call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Endpoint accepted the request
    Sent,
    /// Request failed or endpoint answered with a non-success status
    Failed,
}

impl SendOutcome {
    /// Whether the call succeeded
    pub fn is_sent(&self) -> bool {
        matches!(self, SendOutcome::Sent)
    }
}

/// A document from the orders API that could not be decoded into an [`Order`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedDocument {
    /// Position in the response array
    pub index: usize,
    /// `OrderId` of the raw document, when it carries a string one
    pub order_id: Option<String>,
    /// Decode error
    pub reason: String,
}

/// Outcome of one fetch
///
/// `orders` is empty when the fetch failed; `fetch_error` then says why.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchedBatch {
    /// Decoded orders, in response order
    pub orders: Vec<Order>,
    /// Documents left out of `orders`
    pub dropped: Vec<DroppedDocument>,
    /// Transport, status or body-shape failure of the fetch itself
    pub fetch_error: Option<String>,
}

impl FetchedBatch {
    /// A batch where every document decoded
    pub fn from_orders(orders: Vec<Order>) -> Self {
        Self {
            orders,
            ..Self::default()
        }
    }

    /// A fetch that produced nothing
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            fetch_error: Some(error.into()),
            ..Self::default()
        }
    }

    /// Whether the fetch failed or any document was dropped
    pub fn is_degraded(&self) -> bool {
        self.fetch_error.is_some() || !self.dropped.is_empty()
    }
}

/// Source of pending orders
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Fetch the current batch of orders
    ///
    /// Never fails outright: a transport or decode failure yields an empty
    /// batch with `fetch_error` set, and undecodable documents are listed in
    /// `dropped` while the rest of the batch is kept.
    async fn fetch_orders(&self) -> FetchedBatch;
}

/// Sink for delivery alerts
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send one delivery alert. Performs a single attempt, no retries.
    async fn send_alert(&self, alert: DeliveryAlert) -> SendOutcome;
}

/// Sink for processed orders
#[async_trait]
pub trait UpdatePublisher: Send + Sync {
    /// Push the order's current state. Performs a single attempt, no retries.
    async fn publish(&self, order: &Order) -> SendOutcome;
}
