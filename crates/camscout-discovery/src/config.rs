//! Discovery engine configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tunables for the discovery engine.
///
/// Endpoint paths are protocol constants (see [`crate::vapix`]) and not
/// configurable; only timing and fan-out are.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Bound on every HTTP request, in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Maximum devices probed in parallel by `discover_many`.
    #[serde(default = "default_device_concurrency")]
    pub device_concurrency: usize,
}

fn default_request_timeout() -> u64 {
    10
}

fn default_device_concurrency() -> usize {
    8
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout(),
            device_concurrency: default_device_concurrency(),
        }
    }
}

impl DiscoveryConfig {
    /// Create a configuration with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_secs = timeout.as_secs().max(1);
        self
    }

    /// Override the `discover_many` fan-out width.
    pub fn with_device_concurrency(mut self, concurrency: usize) -> Self {
        self.device_concurrency = concurrency.max(1);
        self
    }

    /// Per-request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
