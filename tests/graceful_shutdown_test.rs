//! Integration tests for graceful shutdown
//!
//! The shutdown flag is only consulted between orders: the order in flight is
//! finished and published, the rest are skipped.

use async_trait::async_trait;
use orderwatch::adapters::dry_run::LoggingNotifier;
use orderwatch::adapters::sample::SampleOrderRepository;
use orderwatch::adapters::{PipelineServices, SendOutcome, UpdatePublisher};
use orderwatch::core::pipeline::PipelineDriver;
use orderwatch::domain::Order;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

/// Publisher that requests shutdown after publishing its first order
struct ShutdownAfterFirst {
    shutdown_tx: watch::Sender<bool>,
    published: Mutex<Vec<String>>,
}

#[async_trait]
impl UpdatePublisher for ShutdownAfterFirst {
    async fn publish(&self, order: &Order) -> SendOutcome {
        self.published.lock().unwrap().push(order.id.to_string());
        let _ = self.shutdown_tx.send(true);
        SendOutcome::Sent
    }
}

#[tokio::test]
async fn test_shutdown_between_orders() {
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let publisher = Arc::new(ShutdownAfterFirst {
        shutdown_tx,
        published: Mutex::new(Vec::new()),
    });
    let services = PipelineServices {
        repository: Arc::new(SampleOrderRepository::new()),
        notifier: Arc::new(LoggingNotifier),
        publisher: publisher.clone(),
    };

    let summary = PipelineDriver::new(services, shutdown_rx).run().await;

    assert_eq!(*publisher.published.lock().unwrap(), vec!["o11".to_string()]);
    assert!(summary.interrupted);
    assert_eq!(summary.orders_fetched, 3);
    assert_eq!(summary.orders_processed, 1);
    assert_eq!(summary.orders_published, 1);
    // The alert raised before shutdown is still collected
    assert_eq!(summary.alerts_sent, 1);
    assert_eq!(summary.exit_code(), 130);
}

#[tokio::test]
async fn test_no_shutdown_runs_to_completion() {
    let (_shutdown_tx, shutdown_rx) = watch::channel(false);
    let services = PipelineServices {
        repository: Arc::new(SampleOrderRepository::new()),
        notifier: Arc::new(LoggingNotifier),
        publisher: Arc::new(orderwatch::adapters::dry_run::LoggingPublisher),
    };

    let summary = PipelineDriver::new(services, shutdown_rx).run().await;

    assert!(!summary.interrupted);
    assert_eq!(summary.orders_published, 3);
    assert_eq!(summary.exit_code(), 0);
}
