//! Init command implementation
//!
//! This module implements the `init` command for generating a starter
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "orderwatch.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Orderwatch configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your endpoint URLs", self.output);
                println!("  2. Put credentials in a .env file if your endpoints need auth:");
                println!("     - ORDERWATCH_HTTP_USERNAME / ORDERWATCH_HTTP_PASSWORD, or");
                println!("     - ORDERWATCH_HTTP_TOKEN");
                println!("  3. Validate configuration: orderwatch validate-config");
                println!("  4. Try it without side effects: orderwatch run --dry-run");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Starter configuration
    fn generate_config() -> String {
        r#"# Orderwatch Configuration File

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Log alerts and updates instead of sending them
dry_run = false

[endpoints]
# GET: returns the JSON array of pending orders
orders_api_url = "http://localhost:8080/orders"

# POST: receives one {"Message": "..."} per delivered item
alert_api_url = "http://localhost:8081/alerts"

# POST: receives each processed order
update_api_url = "http://localhost:8080/orders/update"

[http]
timeout_seconds = 30
connect_timeout_seconds = 10
tls_verify = true

# Authentication (none, basic, bearer)
auth_type = "none"
# username = "${ORDERWATCH_HTTP_USERNAME}"
# password = "${ORDERWATCH_HTTP_PASSWORD}"
# token = "${ORDERWATCH_HTTP_TOKEN}"

[logging]
# JSON log file in addition to the console
local_enabled = false
local_path = "./logs"
# daily, hourly, never
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_writes_loadable_config() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("orderwatch.toml");
        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };

        assert_eq!(args.execute().await.unwrap(), 0);

        let config = load_config(&output).unwrap();
        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.endpoints.orders_api_url, "http://localhost:8080/orders");
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("orderwatch.toml");
        fs::write(&output, "keep me").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: true,
        };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert_ne!(fs::read_to_string(&output).unwrap(), "keep me");
    }
}
