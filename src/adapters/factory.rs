//! Service factory
//!
//! Wires the repository, notifier, and publisher implementations for a run
//! based on configuration.

use crate::adapters::dry_run::{LoggingNotifier, LoggingPublisher};
use crate::adapters::http::{HttpNotifier, HttpOrderRepository, HttpUpdatePublisher};
use crate::adapters::sample::SampleOrderRepository;
use crate::adapters::traits::{Notifier, OrderRepository, UpdatePublisher};
use crate::config::OrderwatchConfig;
use crate::domain::Result;
use std::sync::Arc;

/// The three collaborators the pipeline runs against
#[derive(Clone)]
pub struct PipelineServices {
    pub repository: Arc<dyn OrderRepository>,
    pub notifier: Arc<dyn Notifier>,
    pub publisher: Arc<dyn UpdatePublisher>,
}

/// Create the services for a run
///
/// - `sample_data` swaps the orders API for the built-in sample batch.
/// - `application.dry_run` swaps the alert and update endpoints for logging sinks.
///
/// # Errors
///
/// Returns an error if an HTTP client cannot be built.
pub fn create_services(config: &OrderwatchConfig, sample_data: bool) -> Result<PipelineServices> {
    let repository: Arc<dyn OrderRepository> = if sample_data {
        tracing::info!("Using built-in sample orders");
        Arc::new(SampleOrderRepository::new())
    } else {
        tracing::info!(url = %config.endpoints.orders_api_url, "Creating orders API client");
        Arc::new(HttpOrderRepository::new(
            config.endpoints.orders_api_url.clone(),
            &config.http,
        )?)
    };

    let (notifier, publisher): (Arc<dyn Notifier>, Arc<dyn UpdatePublisher>) =
        if config.application.dry_run {
            tracing::info!("Dry-run mode: alerts and updates will be logged, not sent");
            (Arc::new(LoggingNotifier), Arc::new(LoggingPublisher))
        } else {
            (
                Arc::new(HttpNotifier::new(
                    config.endpoints.alert_api_url.clone(),
                    &config.http,
                )?),
                Arc::new(HttpUpdatePublisher::new(
                    config.endpoints.update_api_url.clone(),
                    &config.http,
                )?),
            )
        };

    Ok(PipelineServices {
        repository,
        notifier,
        publisher,
    })
}
