//! Run summary and reporting
//!
//! Tallies what a single pipeline pass did and maps it to a process exit code.

use chrono::{DateTime, Utc};
use std::time::Duration;
use uuid::Uuid;

/// Summary of one pipeline pass
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Identifier shared by every log line of the run
    pub run_id: Uuid,

    /// Wall-clock start of the run
    pub started_at: DateTime<Utc>,

    /// Duration of the run, alert drain included
    pub duration: Duration,

    /// Whether the orders API could not be read at all
    pub fetch_failed: bool,

    /// Orders returned by the repository
    pub orders_fetched: usize,

    /// Documents in the response that could not be decoded
    pub orders_dropped: usize,

    /// Orders handed to the processor, malformed ones included
    pub orders_processed: usize,

    /// Orders the update endpoint accepted
    pub orders_published: usize,

    /// Orders the update endpoint rejected or could not be reached for
    pub publish_failures: usize,

    /// Orders without an items field
    pub malformed_orders: usize,

    /// Items that could not be evaluated
    pub item_errors: usize,

    /// Items found delivered
    pub delivered_items: usize,

    /// Alerts the alert endpoint accepted
    pub alerts_sent: usize,

    /// Alerts that failed
    pub alerts_failed: usize,

    /// Whether the run stopped early on a shutdown signal
    pub interrupted: bool,

    /// Per-order errors
    pub errors: Vec<RunError>,
}

impl RunSummary {
    /// Create an empty summary for a run starting now
    pub fn new(run_id: Uuid) -> Self {
        Self {
            run_id,
            started_at: Utc::now(),
            duration: Duration::from_secs(0),
            fetch_failed: false,
            orders_fetched: 0,
            orders_dropped: 0,
            orders_processed: 0,
            orders_published: 0,
            publish_failures: 0,
            malformed_orders: 0,
            item_errors: 0,
            delivered_items: 0,
            alerts_sent: 0,
            alerts_failed: 0,
            interrupted: false,
            errors: Vec::new(),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Add an error
    pub fn add_error(&mut self, error: RunError) {
        self.errors.push(error);
    }

    /// True when nothing failed: fetch and decode clean, no order/item errors,
    /// no rejected updates or alerts
    pub fn is_successful(&self) -> bool {
        !self.fetch_failed
            && self.orders_dropped == 0
            && self.errors.is_empty()
            && self.publish_failures == 0
            && self.alerts_failed == 0
    }

    /// Process exit code for this run
    ///
    /// `130` when interrupted, `0` when successful, `1` otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.interrupted {
            130
        } else if self.is_successful() {
            0
        } else {
            1
        }
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            run_id = %self.run_id,
            fetch_failed = self.fetch_failed,
            orders_fetched = self.orders_fetched,
            orders_dropped = self.orders_dropped,
            orders_processed = self.orders_processed,
            orders_published = self.orders_published,
            publish_failures = self.publish_failures,
            malformed_orders = self.malformed_orders,
            item_errors = self.item_errors,
            delivered_items = self.delivered_items,
            alerts_sent = self.alerts_sent,
            alerts_failed = self.alerts_failed,
            interrupted = self.interrupted,
            duration_ms = self.duration.as_millis() as u64,
            "Pipeline run completed"
        );

        if !self.errors.is_empty() {
            tracing::warn!(error_count = self.errors.len(), "Run completed with errors");
            for error in &self.errors {
                tracing::warn!(
                    error_type = ?error.error_type,
                    message = %error.message,
                    context = error.context.as_deref().unwrap_or(""),
                    "Run error"
                );
            }
        }
    }
}

/// Type of run error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunErrorType {
    /// Orders API unreachable, non-success status or unreadable body
    Fetch,
    /// Order document that could not be decoded
    Decode,
    /// Order without an items field
    MalformedOrder,
    /// Item without a status
    MissingStatus,
    /// Update endpoint rejected the order
    Publish,
}

/// Run error with context
#[derive(Debug, Clone)]
pub struct RunError {
    pub error_type: RunErrorType,
    pub message: String,
    /// e.g. `order_id=o11`
    pub context: Option<String>,
}

impl RunError {
    pub fn new(error_type: RunErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}
