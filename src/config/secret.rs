//! Endpoint credentials
//!
//! The basic-auth password and bearer token live in a `Secret`: redacted from
//! `Debug`, zeroed on drop, readable only through `expose_secret()`.
//!
//! # Example
//!
//! ```rust
//! use orderwatch::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let token = secret_string("api-token".to_string());
//! assert_eq!(token.expose_secret(), "api-token");
//! assert!(!format!("{token:?}").contains("api-token"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// Credential text, wiped on drop
#[derive(Clone, Debug, Zeroize, Serialize, Deserialize)]
#[zeroize(drop)]
#[serde(transparent)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl SecretValue {
    /// True for an empty credential, which validation treats as missing
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Credential text, e.g. for building an Authorization header
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SecretValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// A credential as held in configuration
pub type SecretString = Secret<SecretValue>;

/// Wrap a plain string, e.g. one read from an environment override
pub fn secret_string(value: String) -> SecretString {
    Secret::new(value.into())
}
