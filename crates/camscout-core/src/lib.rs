//! Core contracts and data model for the CamScout platform.
//!
//! This crate holds the pieces shared between the discovery engine and the
//! systems around it:
//!
//! - **DeviceRecord / CapabilityMap**: the output model of a discovery pass
//! - **CredentialsProvider**: the seam through which an external secret
//!   store supplies per-device credentials
//!
//! It deliberately contains no network code; the probing machinery lives in
//! `camscout-discovery`.

pub mod credentials;
pub mod record;

pub use credentials::{Credentials, CredentialsError, CredentialsProvider, StaticCredentials};
pub use record::{merge_capability_layers, CapabilityMap, DeviceRecord, UNKNOWN};
