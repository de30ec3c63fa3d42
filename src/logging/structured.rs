//! Subscriber setup
//!
//! Console output is always on. When `logging.local_enabled` is set a second,
//! JSON-formatted layer writes to a rolling `orderwatch.log` in `local_path`.
//! Both layers share one filter: `RUST_LOG` if set, else `orderwatch=<level>`.

use crate::config::LoggingConfig;
use crate::domain::{OrderwatchError, Result};
use std::str::FromStr;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::Registry;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FILE_NAME: &str = "orderwatch.log";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Keeps the non-blocking file writer alive; drop it to flush
pub struct LoggingGuard {
    _file_writer: Option<WorkerGuard>,
}

/// Install the global subscriber
///
/// Can only succeed once per process.
///
/// # Example
///
/// ```no_run
/// use orderwatch::logging::init_logging;
/// use orderwatch::config::LoggingConfig;
///
/// let _guard = init_logging("info", &LoggingConfig::default()).expect("Failed to initialize logging");
/// ```
///
/// # Errors
///
/// Returns a configuration error for an unknown level, an uncreatable log
/// directory, or when a subscriber is already installed.
pub fn init_logging(log_level: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    let filter = level_filter(log_level)?;

    let console: BoxedLayer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(filter.clone())
        .boxed();

    let mut layers = vec![console];
    let mut file_writer = None;

    if config.local_enabled {
        let (layer, guard) = json_file_layer(config, filter)?;
        layers.push(layer);
        file_writer = Some(guard);
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| OrderwatchError::Configuration(format!("Logging already initialized: {e}")))?;

    tracing::info!(
        local_enabled = config.local_enabled,
        local_path = %config.local_path,
        "Logging initialized"
    );

    Ok(LoggingGuard {
        _file_writer: file_writer,
    })
}

fn level_filter(log_level: &str) -> Result<EnvFilter> {
    let level = parse_log_level(log_level)?;
    Ok(EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("orderwatch={level}"))))
}

fn json_file_layer(config: &LoggingConfig, filter: EnvFilter) -> Result<(BoxedLayer, WorkerGuard)> {
    std::fs::create_dir_all(&config.local_path).map_err(|e| {
        OrderwatchError::Configuration(format!(
            "Cannot create log directory {}: {e}",
            config.local_path
        ))
    })?;

    let appender = RollingFileAppender::new(
        parse_rotation(&config.local_rotation),
        &config.local_path,
        LOG_FILE_NAME,
    );
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_thread_ids(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(writer)
        .with_filter(filter)
        .boxed();

    Ok((layer, guard))
}

fn parse_log_level(log_level: &str) -> Result<Level> {
    const NAMES: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

    if !NAMES.contains(&log_level.to_lowercase().as_str()) {
        return Err(OrderwatchError::Configuration(format!(
            "Invalid log level '{log_level}'. Must be one of: {}",
            NAMES.join(", ")
        )));
    }

    Level::from_str(log_level)
        .map_err(|e| OrderwatchError::Configuration(format!("Invalid log level '{log_level}': {e}")))
}

/// Unknown values fall back to daily; config validation rejects them earlier.
fn parse_rotation(rotation: &str) -> Rotation {
    match rotation {
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("trace", Level::TRACE)]
    #[test_case("debug", Level::DEBUG)]
    #[test_case("info", Level::INFO)]
    #[test_case("WARN", Level::WARN)]
    #[test_case("Error", Level::ERROR)]
    fn test_parse_log_level(input: &str, expected: Level) {
        assert_eq!(parse_log_level(input).unwrap(), expected);
    }

    #[test_case("verbose")]
    #[test_case("")]
    #[test_case("3")]
    fn test_parse_log_level_rejects(input: &str) {
        assert!(parse_log_level(input).is_err());
    }

    #[test]
    fn test_parse_rotation() {
        assert_eq!(parse_rotation("hourly"), Rotation::HOURLY);
        assert_eq!(parse_rotation("never"), Rotation::NEVER);
        assert_eq!(parse_rotation("daily"), Rotation::DAILY);
    }
}
