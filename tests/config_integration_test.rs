//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold ENV_MUTEX.

use orderwatch::config::{load_config, AuthType};
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn cleanup_env_vars() {
    for var in [
        "ORDERWATCH_APPLICATION_LOG_LEVEL",
        "ORDERWATCH_APPLICATION_DRY_RUN",
        "ORDERWATCH_ENDPOINTS_ORDERS_API_URL",
        "ORDERWATCH_HTTP_TIMEOUT_SECONDS",
        "ORDERWATCH_HTTP_AUTH_TYPE",
        "ORDERWATCH_HTTP_TOKEN",
        "TEST_ORDERWATCH_PASSWORD",
    ] {
        std::env::remove_var(var);
    }
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const MINIMAL: &str = r#"
[endpoints]
orders_api_url = "http://localhost:8080/orders"
alert_api_url = "http://localhost:8081/alerts"
update_api_url = "http://localhost:8080/orders/update"
"#;

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
log_level = "debug"
dry_run = true

[endpoints]
orders_api_url = "https://orders.example.com/api/orders"
alert_api_url = "https://alerts.example.com/api/alerts"
update_api_url = "https://orders.example.com/api/orders/update"

[http]
timeout_seconds = 15
connect_timeout_seconds = 5
tls_verify = false
auth_type = "basic"
username = "svc"
password = "hunter2"

[logging]
local_enabled = true
local_path = "/tmp/orderwatch"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert!(config.application.dry_run);
    assert_eq!(
        config.endpoints.update_api_url,
        "https://orders.example.com/api/orders/update"
    );
    assert_eq!(config.http.timeout_seconds, 15);
    assert_eq!(config.http.connect_timeout_seconds, 5);
    assert!(!config.http.tls_verify);
    assert_eq!(config.http.auth_type, AuthType::Basic);
    assert_eq!(config.http.username.as_deref(), Some("svc"));
    assert_eq!(
        config.http.password.as_ref().unwrap().expose_secret(),
        "hunter2"
    );
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_load_minimal_config_with_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(MINIMAL);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "info");
    assert!(!config.application.dry_run);
    assert_eq!(config.http.timeout_seconds, 30);
    assert_eq!(config.http.connect_timeout_seconds, 10);
    assert!(config.http.tls_verify);
    assert_eq!(config.http.auth_type, AuthType::None);
    assert!(!config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "daily");
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_ORDERWATCH_PASSWORD", "from-env");

    let file = write_config(
        r#"
[endpoints]
orders_api_url = "http://localhost:8080/orders"
alert_api_url = "http://localhost:8081/alerts"
update_api_url = "http://localhost:8080/orders/update"

[http]
auth_type = "basic"
username = "svc"
password = "${TEST_ORDERWATCH_PASSWORD}"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(
        config.http.password.as_ref().unwrap().expose_secret(),
        "from-env"
    );

    cleanup_env_vars();
}

#[test]
fn test_missing_env_var_is_reported() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[endpoints]
orders_api_url = "${TEST_ORDERWATCH_UNSET_ORDERS_URL}"
alert_api_url = "http://localhost:8081/alerts"
update_api_url = "http://localhost:8080/orders/update"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_ORDERWATCH_UNSET_ORDERS_URL"));
}

#[test]
fn test_env_var_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("ORDERWATCH_APPLICATION_LOG_LEVEL", "trace");
    std::env::set_var("ORDERWATCH_APPLICATION_DRY_RUN", "true");
    std::env::set_var(
        "ORDERWATCH_ENDPOINTS_ORDERS_API_URL",
        "https://override.example.com/orders",
    );
    std::env::set_var("ORDERWATCH_HTTP_TIMEOUT_SECONDS", "60");
    std::env::set_var("ORDERWATCH_HTTP_AUTH_TYPE", "bearer");
    std::env::set_var("ORDERWATCH_HTTP_TOKEN", "tok");

    let file = write_config(MINIMAL);
    let result = load_config(file.path());
    cleanup_env_vars();

    let config = result.unwrap();
    assert_eq!(config.application.log_level, "trace");
    assert!(config.application.dry_run);
    assert_eq!(
        config.endpoints.orders_api_url,
        "https://override.example.com/orders"
    );
    assert_eq!(config.http.timeout_seconds, 60);
    assert_eq!(config.http.auth_type, AuthType::Bearer);
}

#[test]
fn test_invalid_config_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let cases = [
        // Not a URL
        MINIMAL.replace("http://localhost:8080/orders\"", "orders\""),
        // Unsupported scheme
        MINIMAL.replace("http://localhost:8081/alerts", "ftp://localhost/alerts"),
        // Empty endpoint
        MINIMAL.replace("http://localhost:8080/orders/update", ""),
        // Timeout out of range
        format!("{MINIMAL}\n[http]\ntimeout_seconds = 0\n"),
        // Basic auth without credentials
        format!("{MINIMAL}\n[http]\nauth_type = \"basic\"\n"),
        // Unknown log level
        format!("[application]\nlog_level = \"loud\"\n{MINIMAL}"),
        // Unknown rotation
        format!("{MINIMAL}\n[logging]\nlocal_rotation = \"weekly\"\n"),
    ];

    for contents in cases {
        let file = write_config(&contents);
        assert!(
            load_config(file.path()).is_err(),
            "expected validation failure for:\n{contents}"
        );
    }
}

#[test]
fn test_missing_endpoints_section_fails_to_parse() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config("[application]\nlog_level = \"info\"\n");
    assert!(load_config(file.path()).is_err());
}

#[test]
fn test_nonexistent_file() {
    let err = load_config("/nonexistent/orderwatch.toml").unwrap_err();
    assert!(err.to_string().contains("not found"));
}
