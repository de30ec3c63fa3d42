//! Configuration schema types
//!
//! This module defines the configuration structure for Orderwatch.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};
use url::Url;

/// Main Orderwatch configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderwatchConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Remote endpoint addresses
    pub endpoints: EndpointsConfig,

    /// HTTP client settings shared by all endpoints
    #[serde(default)]
    pub http: HttpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl OrderwatchConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.endpoints.validate()?;
        self.http.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (log alerts and updates instead of sending them)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Remote endpoint addresses, resolved once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    /// Endpoint returning the pending orders batch (GET)
    pub orders_api_url: String,

    /// Endpoint receiving delivery alerts (POST)
    pub alert_api_url: String,

    /// Endpoint receiving updated orders (POST)
    pub update_api_url: String,
}

impl EndpointsConfig {
    fn validate(&self) -> Result<(), String> {
        validate_endpoint("endpoints.orders_api_url", &self.orders_api_url)?;
        validate_endpoint("endpoints.alert_api_url", &self.alert_api_url)?;
        validate_endpoint("endpoints.update_api_url", &self.update_api_url)?;
        Ok(())
    }
}

fn validate_endpoint(name: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{name} cannot be empty"));
    }

    let url = Url::parse(value).map_err(|e| format!("{name} is not a valid URL: {e}"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(format!("{name} must start with http:// or https://"));
    }

    Ok(())
}

/// Authentication scheme applied to every outgoing request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthType {
    /// No Authorization header
    #[default]
    None,
    /// HTTP Basic authentication
    Basic,
    /// Bearer token
    Bearer,
}

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_seconds")]
    pub connect_timeout_seconds: u64,

    /// TLS certificate verification enabled
    ///
    /// Only disable this against development endpoints with self-signed certificates.
    #[serde(default = "default_true")]
    pub tls_verify: bool,

    /// Authentication scheme
    #[serde(default)]
    pub auth_type: AuthType,

    /// Username for basic authentication
    #[serde(default)]
    pub username: Option<String>,

    /// Password for basic authentication
    #[serde(default)]
    pub password: Option<SecretString>,

    /// Token for bearer authentication
    #[serde(default)]
    pub token: Option<SecretString>,
}

impl HttpConfig {
    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        if self.timeout_seconds == 0 || self.timeout_seconds > 300 {
            return Err(format!(
                "http.timeout_seconds must be between 1 and 300, got {}",
                self.timeout_seconds
            ));
        }

        if self.connect_timeout_seconds == 0 {
            return Err("http.connect_timeout_seconds must be > 0".to_string());
        }

        match self.auth_type {
            AuthType::None => {}
            AuthType::Basic => {
                if self.username.as_deref().map(str::is_empty).unwrap_or(true) {
                    return Err(
                        "http.username cannot be empty when auth_type is 'basic'".to_string()
                    );
                }
                if self
                    .password
                    .as_ref()
                    .map(|p| p.expose_secret().is_empty())
                    .unwrap_or(true)
                {
                    return Err(
                        "http.password cannot be empty when auth_type is 'basic'".to_string()
                    );
                }
            }
            AuthType::Bearer => {
                if self
                    .token
                    .as_ref()
                    .map(|t| t.expose_secret().is_empty())
                    .unwrap_or(true)
                {
                    return Err("http.token cannot be empty when auth_type is 'bearer'".to_string());
                }
            }
        }

        Ok(())
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            connect_timeout_seconds: default_connect_timeout_seconds(),
            tls_verify: true,
            auth_type: AuthType::None,
            username: None,
            password: None,
            token: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled is true".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_connect_timeout_seconds() -> u64 {
    10
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
