//! Discovered-device data model.
//!
//! A [`DeviceRecord`] is the output of one discovery pass: identity fields
//! from the device-info endpoint plus a merged capability map from the
//! probes. Records are plain data; consumers (registries, dashboards) own
//! their copies.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder for identity fields the device did not report.
pub const UNKNOWN: &str = "Unknown";

/// Capability flags keyed by name.
///
/// Values are usually booleans but any JSON value is allowed; the parameter
/// probe reports counts and version strings. A key that is absent means
/// "unknown", not "unsupported".
pub type CapabilityMap = HashMap<String, Value>;

/// Identity and capabilities of one discovered device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Network address the device was discovered at (host or host:port).
    pub address: String,
    /// Product model, or [`UNKNOWN`].
    pub model: String,
    /// Firmware version, or [`UNKNOWN`].
    pub firmware_version: String,
    /// Hardware/serial identifier, or [`UNKNOWN`].
    pub hardware_id: String,
    /// Merged capability map from all probe strategies.
    pub capabilities: CapabilityMap,
    /// Wall-clock time the record was assembled (ISO-8601 when serialized).
    pub last_updated: DateTime<Utc>,
}

impl DeviceRecord {
    /// Look up a capability value by name.
    pub fn capability(&self, name: &str) -> Option<&Value> {
        self.capabilities.get(name)
    }

    /// Whether a capability is present and explicitly `true`.
    pub fn has_capability(&self, name: &str) -> bool {
        matches!(self.capabilities.get(name), Some(Value::Bool(true)))
    }
}

/// Merge capability layers with last-writer-wins semantics.
///
/// Layers are applied in iteration order; a later layer's key overwrites an
/// earlier one's on collision. Keys absent from every layer stay absent;
/// nothing is ever filled in as `false`.
pub fn merge_capability_layers<I>(layers: I) -> CapabilityMap
where
    I: IntoIterator<Item = CapabilityMap>,
{
    let mut merged = CapabilityMap::new();
    for layer in layers {
        merged.extend(layer);
    }
    merged
}
