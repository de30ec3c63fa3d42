//! Order processor
//!
//! Evaluates each item of an order, fires a delivery alert for every delivered
//! item and bumps its notification counter. Alerts are spawned onto a
//! [`JoinSet`] and never awaited while the order is being processed; the
//! driver collects them once at the end of the run with
//! [`OrderProcessor::drain_alerts`].

use crate::adapters::traits::{Notifier, SendOutcome};
use crate::domain::{DeliveryAlert, Order, ProcessingError};
use std::sync::Arc;
use tokio::task::JoinSet;

/// What happened to one order's items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// Items whose status could be evaluated
    pub evaluated: usize,

    /// Items found delivered (alert fired, counter bumped)
    pub delivered: usize,

    /// Item-level failures; the remaining items were still evaluated
    pub item_errors: Vec<ProcessingError>,
}

impl ProcessOutcome {
    /// Whether every item was evaluated cleanly
    pub fn is_clean(&self) -> bool {
        self.item_errors.is_empty()
    }
}

/// Final tally of the detached alert tasks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertTally {
    pub sent: usize,
    pub failed: usize,
}

/// Applies the delivery rule to orders in place
pub struct OrderProcessor {
    notifier: Arc<dyn Notifier>,
    alerts: JoinSet<SendOutcome>,
}

impl OrderProcessor {
    /// Create a processor sending alerts through `notifier`
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            notifier,
            alerts: JoinSet::new(),
        }
    }

    /// Process one order in place
    ///
    /// Must be called from within a tokio runtime, alerts are spawned onto it.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessingError::MalformedOrder`] when the order has no items
    /// field at all. The order is left untouched in that case.
    pub fn process_order(&mut self, order: &mut Order) -> Result<ProcessOutcome, ProcessingError> {
        let Some(items) = order.items.as_mut() else {
            tracing::error!(order_id = %order.id, "Order has no items field");
            return Err(ProcessingError::MalformedOrder {
                order_id: order.id.to_string(),
            });
        };

        let mut outcome = ProcessOutcome::default();

        if items.is_empty() {
            tracing::warn!(order_id = %order.id, "Order has no items");
            return Ok(outcome);
        }

        for (position, item) in items.iter_mut().enumerate() {
            let Some(delivered) = item.is_delivered() else {
                tracing::error!(
                    order_id = %order.id,
                    position,
                    description = %item.description,
                    "Item has no status"
                );
                outcome.item_errors.push(ProcessingError::MissingStatus {
                    order_id: order.id.to_string(),
                    position,
                    description: item.description.clone(),
                });
                continue;
            };

            outcome.evaluated += 1;
            if !delivered {
                tracing::debug!(
                    order_id = %order.id,
                    description = %item.description,
                    "Item not delivered"
                );
                continue;
            }

            let alert = DeliveryAlert::for_item(&order.id, item);
            let notifier = Arc::clone(&self.notifier);
            self.alerts
                .spawn(async move { notifier.send_alert(alert).await });

            item.increment_delivery_notification();
            outcome.delivered += 1;

            tracing::info!(
                order_id = %order.id,
                description = %item.description,
                delivery_notification = item.delivery_notification,
                "Item delivered, notification count updated"
            );
        }

        Ok(outcome)
    }

    /// Number of alert tasks not yet collected
    pub fn pending_alerts(&self) -> usize {
        self.alerts.len()
    }

    /// Wait for every outstanding alert and tally the outcomes
    pub async fn drain_alerts(&mut self) -> AlertTally {
        let mut tally = AlertTally::default();

        while let Some(joined) = self.alerts.join_next().await {
            match joined {
                Ok(SendOutcome::Sent) => tally.sent += 1,
                Ok(SendOutcome::Failed) => tally.failed += 1,
                Err(e) => {
                    tracing::error!(error = %e, "Alert task did not complete");
                    tally.failed += 1;
                }
            }
        }

        tally
    }
}
