//! Credential contracts for device access.
//!
//! Discovery needs a username/password pair per device but never owns the
//! store behind it. The store lives outside this workspace (a vault, a
//! database, an orchestrator) and plugs in through [`CredentialsProvider`].
//! [`StaticCredentials`] covers tests and small fixed deployments.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

/// A username/password pair for one device.
///
/// Supplied per discovery call and dropped afterwards; nothing in this
/// workspace persists it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account name on the device.
    pub username: String,
    /// Account password.
    pub password: String,
}

impl Credentials {
    /// Create a credentials pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// The password must not leak through debug logging.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Credential lookup error.
#[derive(Debug, Error)]
pub enum CredentialsError {
    /// No credentials on file for the requested device.
    #[error("no credentials for device {address}")]
    NotFound {
        /// Address the lookup was made for.
        address: String,
    },

    /// The backing store failed in a provider-specific way.
    #[error("credentials backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

/// Source of per-device credentials.
///
/// Implemented outside this workspace by whatever holds the secrets.
/// Implementations must be safe to share across concurrent discoveries.
#[async_trait]
pub trait CredentialsProvider: Send + Sync {
    /// Look up the credentials for `address`.
    async fn credentials_for(&self, address: &str) -> Result<Credentials, CredentialsError>;
}

/// Fixed in-memory credential set.
///
/// Per-address entries win over the optional default entry.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    devices: HashMap<String, Credentials>,
    default: Option<Credentials>,
}

impl StaticCredentials {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add credentials for one device.
    pub fn with_device(mut self, address: impl Into<String>, credentials: Credentials) -> Self {
        self.devices.insert(address.into(), credentials);
        self
    }

    /// Set the fallback used for addresses without their own entry.
    pub fn with_default(mut self, credentials: Credentials) -> Self {
        self.default = Some(credentials);
        self
    }
}

#[async_trait]
impl CredentialsProvider for StaticCredentials {
    async fn credentials_for(&self, address: &str) -> Result<Credentials, CredentialsError> {
        if let Some(found) = self.devices.get(address) {
            return Ok(found.clone());
        }
        match &self.default {
            Some(default) => Ok(default.clone()),
            None => Err(CredentialsError::NotFound {
                address: address.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_lookup_prefers_device_entry() {
        let provider = StaticCredentials::new()
            .with_default(Credentials::new("viewer", "viewer"))
            .with_device("10.0.0.5", Credentials::new("root", "pass"));

        let creds = provider.credentials_for("10.0.0.5").await.unwrap();
        assert_eq!(creds.username, "root");

        let creds = provider.credentials_for("10.0.0.9").await.unwrap();
        assert_eq!(creds.username, "viewer");
    }

    #[tokio::test]
    async fn static_lookup_without_entry_fails() {
        let provider = StaticCredentials::new();
        let err = provider.credentials_for("10.0.0.5").await.unwrap_err();
        assert!(matches!(err, CredentialsError::NotFound { ref address } if address == "10.0.0.5"));
    }

    #[test]
    fn debug_redacts_password() {
        let creds = Credentials::new("root", "very-secret");
        let printed = format!("{:?}", creds);
        assert!(printed.contains("root"));
        assert!(!printed.contains("very-secret"));
    }
}
