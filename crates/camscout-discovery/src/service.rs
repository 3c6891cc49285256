//! Discovery service, the high-level entry point.
//!
//! A [`DiscoveryService`] owns the HTTP client, the credentials provider and
//! the registry of discovered devices. `discover_device` runs the full
//! pipeline against one address: resolve credentials, fetch identity, run
//! the three capability probes concurrently, merge, record. Partial data is
//! tolerated everywhere; only two conditions abort a discovery, and both
//! carry their own error variant.

use std::sync::Arc;

use camscout_core::{
    merge_capability_layers, Credentials, CredentialsError, CredentialsProvider, DeviceRecord,
    UNKNOWN,
};
use chrono::Utc;
use futures::{stream, StreamExt};
use thiserror::Error;
use tracing::{info, warn};

use crate::client::VapixClient;
use crate::config::DiscoveryConfig;
use crate::info;
use crate::probes;
use crate::registry::DeviceRegistry;

/// Why a discovery attempt produced no record.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// No credentials could be resolved for the address. Nothing was sent
    /// to the device.
    #[error("no credentials for device {address}")]
    Credentials {
        address: String,
        #[source]
        source: CredentialsError,
    },

    /// Every probe stage failed at the transport level; the device never
    /// answered with so much as a status code.
    #[error("device {address} is unreachable")]
    Unreachable { address: String },
}

/// Orchestrates identity fetch, capability probing and registry upkeep.
pub struct DiscoveryService {
    config: DiscoveryConfig,
    client: VapixClient,
    credentials: Arc<dyn CredentialsProvider>,
    registry: DeviceRegistry,
}

impl DiscoveryService {
    /// Create a service with its own HTTP client and an empty registry.
    pub fn new(config: DiscoveryConfig, credentials: Arc<dyn CredentialsProvider>) -> Self {
        let client = VapixClient::new(&config);
        Self {
            config,
            client,
            credentials,
            registry: DeviceRegistry::new(),
        }
    }

    /// Handle to the registry backing this service. The handle shares state
    /// with the service, so records land in it as discoveries complete.
    pub fn registry(&self) -> DeviceRegistry {
        self.registry.clone()
    }

    /// Discover a single device and record it in the registry.
    ///
    /// The record is best effort: identity fields fall back to `"Unknown"`
    /// and the capability map holds only what the probes positively
    /// established. Capability layers merge in a fixed precedence, feature
    /// probing over parameters over the OpenAPI document.
    pub async fn discover_device(&self, address: &str) -> Result<DeviceRecord, DiscoveryError> {
        let credentials = self.credentials.credentials_for(address).await.map_err(|source| {
            warn!(device = %address, error = %source, "discovery aborted, no credentials");
            DiscoveryError::Credentials {
                address: address.to_string(),
                source,
            }
        })?;

        let record = self.probe_device(address, &credentials).await?;
        info!(
            device = %address,
            model = %record.model,
            capabilities = record.capabilities.len(),
            "device discovered"
        );
        self.registry.insert(record.clone()).await;
        Ok(record)
    }

    /// Discover many devices with bounded concurrency.
    ///
    /// Results come back in input order, one per address, so callers can
    /// zip them against their request list. The registry collects the
    /// successes as usual.
    pub async fn discover_many(
        &self,
        addresses: Vec<String>,
    ) -> Vec<(String, Result<DeviceRecord, DiscoveryError>)> {
        let concurrency = self.config.device_concurrency.max(1);
        stream::iter(addresses)
            .map(|address| async move {
                let outcome = self.discover_device(&address).await;
                (address, outcome)
            })
            .buffered(concurrency)
            .collect()
            .await
    }

    async fn probe_device(
        &self,
        address: &str,
        credentials: &Credentials,
    ) -> Result<DeviceRecord, DiscoveryError> {
        let basic = info::fetch_basic_info_report(&self.client, address, credentials).await;
        let (swagger, params, features) = tokio::join!(
            probes::swagger::probe_report(&self.client, address, credentials),
            probes::params::probe_report(&self.client, address, credentials),
            probes::feature::probe_report(&self.client, address, credentials),
        );

        let contacted =
            basic.contacted || swagger.contacted || params.contacted || features.contacted;
        if !contacted {
            warn!(device = %address, "device answered nothing, treating as unreachable");
            return Err(DiscoveryError::Unreachable {
                address: address.to_string(),
            });
        }

        let capabilities =
            merge_capability_layers([swagger.value, params.value, features.value]);
        let identity = basic.value;
        Ok(DeviceRecord {
            address: address.to_string(),
            model: identity.model.unwrap_or_else(|| UNKNOWN.to_string()),
            firmware_version: identity
                .firmware_version
                .unwrap_or_else(|| UNKNOWN.to_string()),
            hardware_id: identity.hardware_id.unwrap_or_else(|| UNKNOWN.to_string()),
            capabilities,
            last_updated: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_device() {
        let err = DiscoveryError::Unreachable {
            address: "10.0.0.9".to_string(),
        };
        assert_eq!(err.to_string(), "device 10.0.0.9 is unreachable");

        let err = DiscoveryError::Credentials {
            address: "10.0.0.9".to_string(),
            source: CredentialsError::NotFound {
                address: "10.0.0.9".to_string(),
            },
        };
        assert!(err.to_string().contains("10.0.0.9"));
    }
}
