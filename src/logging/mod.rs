//! Logging and observability
//!
//! Structured logging with:
//! - Console output filtered by level or `RUST_LOG`
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use orderwatch::logging::init_logging;
//! use orderwatch::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(order_id = "o11", "Processing order");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log a transport outcome for a remote call
///
/// # Example
///
/// ```no_run
/// use orderwatch::log_send_outcome;
///
/// log_send_outcome!(true, "o11", "Updated order sent for processing", "Failed to send updated order for processing");
/// ```
#[macro_export]
macro_rules! log_send_outcome {
    ($ok:expr, $order_id:expr, $success:literal, $failure:literal) => {
        if $ok {
            tracing::info!(order_id = %$order_id, $success);
        } else {
            tracing::error!(order_id = %$order_id, $failure);
        }
    };
}

/// Log an error with the context message as the event message
///
/// # Example
///
/// ```no_run
/// use orderwatch::log_error_with_context;
/// use orderwatch::domain::OrderwatchError;
///
/// let error = OrderwatchError::Configuration("endpoints.orders_api_url cannot be empty".to_string());
/// log_error_with_context!(error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:literal) => {
        tracing::error!(error = %$error, $context)
    };
}
