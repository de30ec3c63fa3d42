//! Update API client

use super::client::EndpointClient;
use crate::adapters::traits::{SendOutcome, UpdatePublisher};
use crate::config::HttpConfig;
use crate::domain::{Order, Result};
use crate::log_send_outcome;
use async_trait::async_trait;

/// Posts processed orders to the update API
pub struct HttpUpdatePublisher {
    endpoint: EndpointClient,
}

impl HttpUpdatePublisher {
    /// Create a publisher for the given update endpoint
    pub fn new(url: impl Into<String>, config: &HttpConfig) -> Result<Self> {
        Ok(Self {
            endpoint: EndpointClient::new(url, config)?,
        })
    }
}

#[async_trait]
impl UpdatePublisher for HttpUpdatePublisher {
    async fn publish(&self, order: &Order) -> SendOutcome {
        let outcome = match self.endpoint.post().json(order).send().await {
            Ok(resp) if resp.status().is_success() => SendOutcome::Sent,
            Ok(resp) => {
                tracing::debug!(
                    order_id = %order.id,
                    status = resp.status().as_u16(),
                    "Update endpoint returned non-success status"
                );
                SendOutcome::Failed
            }
            Err(e) => {
                tracing::debug!(order_id = %order.id, error = %e, "Update request failed");
                SendOutcome::Failed
            }
        };

        log_send_outcome!(
            outcome.is_sent(),
            order.id,
            "Updated order sent for processing",
            "Failed to send updated order for processing"
        );

        outcome
    }
}
