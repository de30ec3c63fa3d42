//! Run command implementation
//!
//! Executes a single fetch → process → publish pass and prints the summary.

use crate::adapters::create_services;
use crate::config::load_config;
use crate::core::pipeline::{PipelineDriver, RunSummary};
use crate::log_error_with_context;
use clap::Args;
use tokio::sync::watch;

/// Arguments for the run command
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Log alerts and updates instead of sending them
    #[arg(long)]
    pub dry_run: bool,

    /// Process the built-in sample batch instead of calling the orders API
    #[arg(long)]
    pub sample_data: bool,
}

impl RunArgs {
    /// Execute the run command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting run command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }

        if config.application.dry_run {
            println!("🔍 DRY RUN MODE - alerts and updates will be logged, not sent");
            println!();
        }

        let services = match create_services(&config, self.sample_data) {
            Ok(s) => s,
            Err(e) => {
                log_error_with_context!(e, "Failed to create services");
                eprintln!("Failed to initialize run: {e}");
                return Ok(5);
            }
        };

        println!("🚀 Processing orders...");
        println!();

        let summary = PipelineDriver::new(services, shutdown_signal).run().await;
        print_summary(&summary);

        Ok(summary.exit_code())
    }
}

fn print_summary(summary: &RunSummary) {
    println!("📊 Run Summary ({})", summary.run_id);
    println!("  Started: {}", summary.started_at.to_rfc3339());
    if summary.fetch_failed {
        println!("  Fetch: FAILED");
    }
    println!("  Orders Fetched: {}", summary.orders_fetched);
    println!("  Orders Dropped: {}", summary.orders_dropped);
    println!("  Orders Processed: {}", summary.orders_processed);
    println!("  Orders Published: {}", summary.orders_published);
    println!("  Publish Failures: {}", summary.publish_failures);
    println!("  Malformed Orders: {}", summary.malformed_orders);
    println!("  Item Errors: {}", summary.item_errors);
    println!("  Delivered Items: {}", summary.delivered_items);
    println!("  Alerts Sent: {}", summary.alerts_sent);
    println!("  Alerts Failed: {}", summary.alerts_failed);
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    println!();

    if !summary.errors.is_empty() {
        println!("⚠️  Errors encountered:");
        for error in &summary.errors {
            println!("  - {:?}: {}", error.error_type, error.message);
            if let Some(context) = &error.context {
                println!("    Context: {context}");
            }
        }
        println!();
    }

    if summary.interrupted {
        println!("⚠️  Run interrupted, remaining orders were not processed.");
        tracing::info!("Run interrupted by user signal");
    } else if summary.is_successful() {
        println!("✅ Run completed successfully!");
    } else {
        println!("⚠️  Run completed with failures");
    }
}
