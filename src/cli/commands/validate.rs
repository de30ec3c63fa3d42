//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Orderwatch configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates as its last step
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!("  Orders API: {}", config.endpoints.orders_api_url);
        println!("  Alert API: {}", config.endpoints.alert_api_url);
        println!("  Update API: {}", config.endpoints.update_api_url);
        println!("  HTTP Timeout: {}s", config.http.timeout_seconds);
        println!("  TLS Verify: {}", config.http.tls_verify);
        println!("  Auth Type: {:?}", config.http.auth_type);
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  File Logging: disabled");
        }
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_valid_config_exits_zero() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[endpoints]
orders_api_url = "https://orders.example.com/orders"
alert_api_url = "https://alerts.example.com/alerts"
update_api_url = "https://orders.example.com/update"
"#
        )
        .unwrap();

        let code = ValidateArgs {}
            .execute(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_invalid_url_exits_two() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[endpoints]
orders_api_url = "not a url"
alert_api_url = "https://alerts.example.com/alerts"
update_api_url = "https://orders.example.com/update"
"#
        )
        .unwrap();

        let code = ValidateArgs {}
            .execute(file.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, 2);
    }
}
