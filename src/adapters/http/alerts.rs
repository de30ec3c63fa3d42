//! Alert API client

use super::client::EndpointClient;
use crate::adapters::traits::{Notifier, SendOutcome};
use crate::config::HttpConfig;
use crate::domain::{DeliveryAlert, Result};
use async_trait::async_trait;

/// Posts delivery alerts to the alert API
pub struct HttpNotifier {
    endpoint: EndpointClient,
}

impl HttpNotifier {
    /// Create a notifier for the given alert endpoint
    pub fn new(url: impl Into<String>, config: &HttpConfig) -> Result<Self> {
        Ok(Self {
            endpoint: EndpointClient::new(url, config)?,
        })
    }
}

#[async_trait]
impl Notifier for HttpNotifier {
    async fn send_alert(&self, alert: DeliveryAlert) -> SendOutcome {
        let result = self.endpoint.post().json(&alert.payload()).send().await;

        match result {
            Ok(resp) if resp.status().is_success() => {
                tracing::info!(
                    order_id = %alert.order_id,
                    description = %alert.description,
                    "Alert sent for delivered item"
                );
                SendOutcome::Sent
            }
            Ok(resp) => {
                tracing::error!(
                    order_id = %alert.order_id,
                    description = %alert.description,
                    status = resp.status().as_u16(),
                    "Failed to send alert for delivered item"
                );
                SendOutcome::Failed
            }
            Err(e) => {
                tracing::error!(
                    order_id = %alert.order_id,
                    description = %alert.description,
                    error = %e,
                    "Failed to send alert for delivered item"
                );
                SendOutcome::Failed
            }
        }
    }
}
