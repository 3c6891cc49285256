//! In-memory registry of discovered devices.
//!
//! The registry is the read side of discovery: every successful probe run
//! lands here, keyed by address, and stays until it is invalidated or the
//! registry is cleared. Cloning the registry is cheap and all clones share
//! the same map.

use camscout_core::DeviceRecord;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Shared, concurrency-safe store of [`DeviceRecord`]s keyed by address.
#[derive(Debug, Clone)]
pub struct DeviceRegistry {
    devices: Arc<RwLock<HashMap<String, DeviceRecord>>>,
}

impl DeviceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            devices: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert or replace the record for its address.
    ///
    /// Returns the previous record when the address was already known.
    pub async fn insert(&self, record: DeviceRecord) -> Option<DeviceRecord> {
        let mut devices = self.devices.write().await;
        let previous = devices.insert(record.address.clone(), record);
        if previous.is_some() {
            debug!(count = devices.len(), "registry entry replaced");
        }
        previous
    }

    /// Get the record for an address.
    pub async fn get(&self, address: &str) -> Option<DeviceRecord> {
        let devices = self.devices.read().await;
        devices.get(address).cloned()
    }

    /// List all known records.
    pub async fn list(&self) -> Vec<DeviceRecord> {
        let devices = self.devices.read().await;
        devices.values().cloned().collect()
    }

    /// Remove the record for an address, returning it if present.
    pub async fn invalidate(&self, address: &str) -> Option<DeviceRecord> {
        let mut devices = self.devices.write().await;
        devices.remove(address)
    }

    /// Drop every record.
    pub async fn clear(&self) {
        let mut devices = self.devices.write().await;
        devices.clear();
    }

    /// Number of known devices.
    pub async fn len(&self) -> usize {
        let devices = self.devices.read().await;
        devices.len()
    }

    /// Whether the registry holds no records.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
