//! Recording doubles for the service traits, shared by the core unit tests.

use crate::adapters::traits::{
    FetchedBatch, Notifier, OrderRepository, SendOutcome, UpdatePublisher,
};
use crate::domain::{DeliveryAlert, Order};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub alerts: Arc<Mutex<Vec<DeliveryAlert>>>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn recorded(&self) -> Vec<DeliveryAlert> {
        self.alerts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send_alert(&self, alert: DeliveryAlert) -> SendOutcome {
        self.alerts.lock().unwrap().push(alert);
        if self.fail {
            SendOutcome::Failed
        } else {
            SendOutcome::Sent
        }
    }
}

#[derive(Clone, Default)]
pub struct RecordingPublisher {
    pub published: Arc<Mutex<Vec<Order>>>,
    /// Order ids whose publish reports a failure
    pub fail_for: Vec<String>,
}

impl RecordingPublisher {
    pub fn recorded(&self) -> Vec<Order> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpdatePublisher for RecordingPublisher {
    async fn publish(&self, order: &Order) -> SendOutcome {
        self.published.lock().unwrap().push(order.clone());
        if self.fail_for.iter().any(|id| id == order.id.as_str()) {
            SendOutcome::Failed
        } else {
            SendOutcome::Sent
        }
    }
}

pub struct FixedRepository(pub FetchedBatch);

#[async_trait]
impl OrderRepository for FixedRepository {
    async fn fetch_orders(&self) -> FetchedBatch {
        self.0.clone()
    }
}
