//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{AuthType, OrderwatchConfig};
use super::secret::secret_string;
use crate::domain::errors::OrderwatchError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into OrderwatchConfig
/// 4. Applies environment variable overrides (ORDERWATCH_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns a configuration error if the file cannot be read or parsed, a
/// referenced environment variable is unset, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use orderwatch::config::loader::load_config;
///
/// let config = load_config("orderwatch.toml").expect("Failed to load config");
/// println!("{}", config.endpoints.orders_api_url);
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<OrderwatchConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(OrderwatchError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        OrderwatchError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: OrderwatchConfig = toml::from_str(&contents)
        .map_err(|e| OrderwatchError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        OrderwatchError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched. All missing variables are reported at once.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| OrderwatchError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(OrderwatchError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using ORDERWATCH_* prefix
///
/// Environment variables follow the pattern: ORDERWATCH_<SECTION>_<KEY>
/// For example: ORDERWATCH_ENDPOINTS_ORDERS_API_URL, ORDERWATCH_HTTP_TIMEOUT_SECONDS
fn apply_env_overrides(config: &mut OrderwatchConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("ORDERWATCH_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("ORDERWATCH_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // Endpoint overrides
    if let Ok(val) = std::env::var("ORDERWATCH_ENDPOINTS_ORDERS_API_URL") {
        config.endpoints.orders_api_url = val;
    }
    if let Ok(val) = std::env::var("ORDERWATCH_ENDPOINTS_ALERT_API_URL") {
        config.endpoints.alert_api_url = val;
    }
    if let Ok(val) = std::env::var("ORDERWATCH_ENDPOINTS_UPDATE_API_URL") {
        config.endpoints.update_api_url = val;
    }

    // HTTP overrides
    if let Ok(val) = std::env::var("ORDERWATCH_HTTP_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.http.timeout_seconds = timeout;
        }
    }
    if let Ok(val) = std::env::var("ORDERWATCH_HTTP_TLS_VERIFY") {
        config.http.tls_verify = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("ORDERWATCH_HTTP_AUTH_TYPE") {
        config.http.auth_type = match val.to_lowercase().as_str() {
            "none" => AuthType::None,
            "basic" => AuthType::Basic,
            "bearer" => AuthType::Bearer,
            other => {
                return Err(OrderwatchError::Configuration(format!(
                    "Invalid ORDERWATCH_HTTP_AUTH_TYPE '{other}'. Must be one of: none, basic, bearer"
                )))
            }
        };
    }
    if let Ok(val) = std::env::var("ORDERWATCH_HTTP_USERNAME") {
        config.http.username = Some(val);
    }
    if let Ok(val) = std::env::var("ORDERWATCH_HTTP_PASSWORD") {
        config.http.password = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("ORDERWATCH_HTTP_TOKEN") {
        config.http.token = Some(secret_string(val));
    }

    // Logging overrides
    if let Ok(val) = std::env::var("ORDERWATCH_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("ORDERWATCH_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}
