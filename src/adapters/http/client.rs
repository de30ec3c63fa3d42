//! Shared HTTP client construction
//!
//! Every endpoint service builds its `reqwest::Client` here so timeouts, TLS
//! settings and the Authorization header are applied the same way everywhere.

use crate::config::{AuthType, HttpConfig};
use crate::domain::{Result, TransportError};
use base64::{engine::general_purpose, Engine as _};
use reqwest::{Client, ClientBuilder, RequestBuilder};
use secrecy::ExposeSecret;
use std::time::Duration;

/// HTTP client bound to one endpoint
#[derive(Clone)]
pub struct EndpointClient {
    url: String,
    client: Client,
    auth_header: Option<String>,
}

impl EndpointClient {
    /// Build a client for `url` from the shared HTTP settings
    ///
    /// # Errors
    ///
    /// Returns a transport error if the underlying client cannot be built.
    pub fn new(url: impl Into<String>, config: &HttpConfig) -> Result<Self> {
        let mut client_builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds));

        if !config.tls_verify {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder
            .build()
            .map_err(|e| TransportError::ClientBuild(e.to_string()))?;

        Ok(Self {
            url: url.into(),
            client,
            auth_header: auth_header_value(config),
        })
    }

    /// Endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// GET request to the endpoint
    pub fn get(&self) -> RequestBuilder {
        self.with_auth(self.client.get(&self.url))
    }

    /// POST request to the endpoint
    pub fn post(&self) -> RequestBuilder {
        self.with_auth(self.client.post(&self.url))
    }

    fn with_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth_header {
            Some(value) => request.header("Authorization", value),
            None => request,
        }
    }
}

/// Build the Authorization header value for the configured scheme
fn auth_header_value(config: &HttpConfig) -> Option<String> {
    match config.auth_type {
        AuthType::None => None,
        AuthType::Basic => {
            let username = config.username.as_ref()?;
            let password = config.password.as_ref()?;
            let credentials = format!("{username}:{}", password.expose_secret().as_str());
            let encoded = general_purpose::STANDARD.encode(credentials.as_bytes());
            Some(format!("Basic {encoded}"))
        }
        AuthType::Bearer => config
            .token
            .as_ref()
            .map(|token| format!("Bearer {}", token.expose_secret().as_str())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;

    #[test]
    fn test_no_auth_header_by_default() {
        assert_eq!(auth_header_value(&HttpConfig::default()), None);
    }

    #[test]
    fn test_basic_auth_header() {
        let config = HttpConfig {
            auth_type: AuthType::Basic,
            username: Some("user".to_string()),
            password: Some(secret_string("pass".to_string())),
            ..Default::default()
        };
        // base64("user:pass")
        assert_eq!(
            auth_header_value(&config),
            Some("Basic dXNlcjpwYXNz".to_string())
        );
    }

    #[test]
    fn test_bearer_auth_header() {
        let config = HttpConfig {
            auth_type: AuthType::Bearer,
            token: Some(secret_string("abc123".to_string())),
            ..Default::default()
        };
        assert_eq!(auth_header_value(&config), Some("Bearer abc123".to_string()));
    }

    #[test]
    fn test_basic_auth_without_password_sends_no_header() {
        let config = HttpConfig {
            auth_type: AuthType::Basic,
            username: Some("user".to_string()),
            ..Default::default()
        };
        assert_eq!(auth_header_value(&config), None);
    }

    #[test]
    fn test_endpoint_client_creation() {
        let client = EndpointClient::new("http://localhost:8080/orders", &HttpConfig::default())
            .unwrap();
        assert_eq!(client.url(), "http://localhost:8080/orders");
    }
}
