//! Capability probes.
//!
//! Three independent, stateless strategies for inferring what a device can
//! do, each with the same contract: best effort, never raises, empty map on
//! failure. The service runs them concurrently and merges their maps in a
//! fixed precedence (swagger, then parameters, then feature probing).

pub mod feature;
pub mod params;
pub mod swagger;

pub use feature::probe_via_features;
pub use params::probe_via_parameters;
pub use swagger::probe_via_swagger;
