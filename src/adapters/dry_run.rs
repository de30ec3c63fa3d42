//! Dry-run sinks
//!
//! Used when `dry_run` is enabled: alerts and updates are logged with their full
//! payload instead of being sent, and always report [`SendOutcome::Sent`].

use crate::adapters::traits::{Notifier, SendOutcome, UpdatePublisher};
use crate::domain::{DeliveryAlert, Order};
use async_trait::async_trait;

/// Notifier that only logs the alert message
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNotifier;

#[async_trait]
impl Notifier for LoggingNotifier {
    async fn send_alert(&self, alert: DeliveryAlert) -> SendOutcome {
        tracing::info!(
            order_id = %alert.order_id,
            description = %alert.description,
            message = %alert.message(),
            "[dry-run] Alert not sent"
        );
        SendOutcome::Sent
    }
}

/// Publisher that only logs the order document
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingPublisher;

#[async_trait]
impl UpdatePublisher for LoggingPublisher {
    async fn publish(&self, order: &Order) -> SendOutcome {
        let body = serde_json::to_string(order).unwrap_or_else(|e| format!("<unserializable: {e}>"));
        tracing::info!(order_id = %order.id, body = %body, "[dry-run] Update not sent");
        SendOutcome::Sent
    }
}
