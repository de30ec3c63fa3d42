//! Pipeline driver
//!
//! Runs a single pass: fetch the batch once, then for each order in turn
//! process it and publish the result. Orders whose processing failed are
//! still published, unchanged. A failed fetch and documents dropped during
//! decoding are recorded as run errors.

use crate::adapters::factory::PipelineServices;
use crate::adapters::traits::FetchedBatch;
use crate::core::pipeline::summary::{RunError, RunErrorType, RunSummary};
use crate::core::processor::OrderProcessor;
use crate::domain::{Order, ProcessingError};
use std::time::Instant;
use tokio::sync::watch;
use tracing::Instrument;
use uuid::Uuid;

/// Drives one fetch → process → publish pass
pub struct PipelineDriver {
    services: PipelineServices,
    shutdown_signal: watch::Receiver<bool>,
}

impl PipelineDriver {
    /// Create a driver
    ///
    /// `shutdown_signal` is checked between orders. Once it reads `true` the
    /// remaining orders are skipped.
    pub fn new(services: PipelineServices, shutdown_signal: watch::Receiver<bool>) -> Self {
        Self {
            services,
            shutdown_signal,
        }
    }

    /// Execute one pass and return its summary
    pub async fn run(&self) -> RunSummary {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("pipeline_run", run_id = %run_id);
        self.execute(run_id).instrument(span).await
    }

    async fn execute(&self, run_id: Uuid) -> RunSummary {
        let start_time = Instant::now();
        let mut summary = RunSummary::new(run_id);

        tracing::info!("Starting pipeline run");

        let batch = self.services.repository.fetch_orders().await;
        let orders = record_fetch(&mut summary, batch);

        if orders.is_empty() {
            tracing::info!("No orders to process");
            let summary = summary.with_duration(start_time.elapsed());
            summary.log_summary();
            return summary;
        }

        tracing::info!(count = orders.len(), "Processing orders");

        let mut processor = OrderProcessor::new(self.services.notifier.clone());

        for mut order in orders {
            if *self.shutdown_signal.borrow() {
                tracing::warn!(
                    remaining = summary.orders_fetched - summary.orders_processed,
                    "Shutdown requested, skipping remaining orders"
                );
                summary.interrupted = true;
                break;
            }

            summary.orders_processed += 1;
            let context = format!("order_id={}", order.id);

            match processor.process_order(&mut order) {
                Ok(outcome) => {
                    summary.delivered_items += outcome.delivered;
                    summary.item_errors += outcome.item_errors.len();
                    for error in outcome.item_errors {
                        summary.add_error(processing_error(&error).with_context(context.clone()));
                    }
                }
                Err(error) => {
                    summary.malformed_orders += 1;
                    summary.add_error(processing_error(&error).with_context(context.clone()));
                }
            }

            if self.services.publisher.publish(&order).await.is_sent() {
                summary.orders_published += 1;
            } else {
                summary.publish_failures += 1;
                summary.add_error(
                    RunError::new(RunErrorType::Publish, "Update endpoint rejected order")
                        .with_context(context),
                );
            }
        }

        let pending = processor.pending_alerts();
        if pending > 0 {
            tracing::debug!(pending, "Waiting for outstanding alerts");
        }
        let tally = processor.drain_alerts().await;
        summary.alerts_sent = tally.sent;
        summary.alerts_failed = tally.failed;

        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();
        summary
    }
}

fn record_fetch(summary: &mut RunSummary, batch: FetchedBatch) -> Vec<Order> {
    if let Some(error) = batch.fetch_error {
        summary.fetch_failed = true;
        summary.add_error(RunError::new(RunErrorType::Fetch, error));
    }

    summary.orders_dropped = batch.dropped.len();
    for dropped in batch.dropped {
        let context = match dropped.order_id {
            Some(order_id) => format!("index={}, order_id={order_id}", dropped.index),
            None => format!("index={}", dropped.index),
        };
        summary.add_error(RunError::new(RunErrorType::Decode, dropped.reason).with_context(context));
    }

    summary.orders_fetched = batch.orders.len();
    batch.orders
}

fn processing_error(error: &ProcessingError) -> RunError {
    let error_type = match error {
        ProcessingError::MalformedOrder { .. } => RunErrorType::MalformedOrder,
        ProcessingError::MissingStatus { .. } => RunErrorType::MissingStatus,
    };
    RunError::new(error_type, error.to_string())
}
