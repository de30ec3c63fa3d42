//! Domain error types
//!
//! This module defines the error hierarchy for Orderwatch.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Orderwatch error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum OrderwatchError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Remote endpoint errors (orders, alert, or update API)
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Order processing errors
    #[error("Processing error: {0}")]
    Processing(#[from] ProcessingError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors raised while talking to a remote endpoint
///
/// These errors don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to build the HTTP client
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// Request could not be sent or no response was received
    #[error("Request to {endpoint} failed: {message}")]
    RequestFailed { endpoint: String, message: String },

    /// Endpoint answered with a non-success status
    #[error("Endpoint {endpoint} returned status {status}")]
    UnexpectedStatus { endpoint: String, status: u16 },

    /// Response body could not be decoded
    #[error("Invalid response from {endpoint}: {message}")]
    InvalidResponse { endpoint: String, message: String },
}

/// Errors raised while applying the delivery rule to an order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessingError {
    /// The order has no item sequence at all (absent or null)
    #[error("Order {order_id} has no items field")]
    MalformedOrder { order_id: String },

    /// An item has no status, so its delivery state cannot be decided
    #[error("Item {position} ({description}) of order {order_id} has no status")]
    MissingStatus {
        order_id: String,
        position: usize,
        description: String,
    },
}

// Conversion from std::io::Error
impl From<std::io::Error> for OrderwatchError {
    fn from(err: std::io::Error) -> Self {
        OrderwatchError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for OrderwatchError {
    fn from(err: serde_json::Error) -> Self {
        OrderwatchError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for OrderwatchError {
    fn from(err: toml::de::Error) -> Self {
        OrderwatchError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orderwatch_error_display() {
        let err = OrderwatchError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_transport_error_conversion() {
        let transport_err = TransportError::UnexpectedStatus {
            endpoint: "http://localhost/orders".to_string(),
            status: 503,
        };
        let err: OrderwatchError = transport_err.into();
        assert!(matches!(err, OrderwatchError::Transport(_)));
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_processing_error_conversion() {
        let processing_err = ProcessingError::MalformedOrder {
            order_id: "o11".to_string(),
        };
        let err: OrderwatchError = processing_err.into();
        assert!(matches!(err, OrderwatchError::Processing(_)));
    }

    #[test]
    fn test_missing_status_message_carries_context() {
        let err = ProcessingError::MissingStatus {
            order_id: "o25".to_string(),
            position: 1,
            description: "Syringe".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("o25"));
        assert!(msg.contains("Syringe"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: OrderwatchError = io_err.into();
        assert!(matches!(err, OrderwatchError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: OrderwatchError = json_err.into();
        assert!(matches!(err, OrderwatchError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: OrderwatchError = toml_err.into();
        assert!(matches!(err, OrderwatchError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let _: &dyn std::error::Error = &OrderwatchError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &ProcessingError::MalformedOrder {
            order_id: "o1".to_string(),
        };
    }
}
