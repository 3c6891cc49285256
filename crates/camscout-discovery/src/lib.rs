//! HTTP-based discovery of network cameras
//!
//! This crate probes cameras over their VAPIX-style HTTP interface and
//! assembles a [`DeviceRecord`] per device without any prior knowledge of
//! its firmware generation.
//!
//! ## Architecture
//!
//! - **DiscoveryService**: orchestrates a discovery run per address
//! - **VapixClient**: thin HTTP layer (basic auth, timeouts, classification)
//! - **Capability probes**: three independent strategies, merged in a fixed
//!   precedence (swagger, then parameters, then feature probing)
//! - **DeviceRegistry**: shared in-memory store of discovered devices
//!
//! Probes are best effort and never abort a run; a device is only reported
//! unreachable when every stage failed at the transport level. Credentials
//! come from a [`CredentialsProvider`] implemented elsewhere.

pub mod client;
pub mod config;
pub mod info;
pub mod probes;
pub mod registry;
pub mod service;
pub mod vapix;

// Re-exports for convenience
pub use camscout_core::{
    CapabilityMap, Credentials, CredentialsError, CredentialsProvider, DeviceRecord,
    StaticCredentials, UNKNOWN,
};

pub use client::{FetchError, VapixClient};
pub use config::DiscoveryConfig;
pub use info::{fetch_basic_info, BasicDeviceInfo};
pub use probes::{probe_via_features, probe_via_parameters, probe_via_swagger};
pub use registry::DeviceRegistry;
pub use service::{DiscoveryError, DiscoveryService};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
