//! OpenAPI introspection probe.
//!
//! Newer devices publish an OpenAPI document describing their HTTP API.
//! Capability flags are inferred from keyword matches over the path table
//! and the component schema names; both scans are cumulative and a missing
//! keyword sets nothing (absence means unknown, never `false`).

use camscout_core::{CapabilityMap, Credentials};
use serde_json::Value;
use tracing::debug;

use crate::client::{StageReport, VapixClient};
use crate::vapix;

/// Probe capabilities via the device's OpenAPI document; never fails.
pub async fn probe_via_swagger(
    client: &VapixClient,
    address: &str,
    credentials: &Credentials,
) -> CapabilityMap {
    probe_report(client, address, credentials).await.value
}

pub(crate) async fn probe_report(
    client: &VapixClient,
    address: &str,
    credentials: &Credentials,
) -> StageReport<CapabilityMap> {
    match client.get_json(address, vapix::OPENAPI_DOC, credentials).await {
        Ok(doc) => StageReport {
            value: parse_openapi_capabilities(&doc),
            contacted: true,
        },
        Err(err) => {
            debug!(device = %address, error = %err, "swagger probe yielded nothing");
            StageReport {
                value: CapabilityMap::new(),
                contacted: !err.is_transport(),
            }
        }
    }
}

/// Derive capability flags from an OpenAPI-style document.
///
/// Keyword matching is case-insensitive on purpose: devices disagree about
/// path casing, and a missed match only loses information.
fn parse_openapi_capabilities(doc: &Value) -> CapabilityMap {
    let mut capabilities = CapabilityMap::new();

    if let Some(paths) = doc.get("paths").and_then(Value::as_object) {
        for path in paths.keys() {
            let lowered = path.to_ascii_lowercase();
            if lowered.contains("analytics") {
                capabilities.insert("analytics_api".to_string(), Value::Bool(true));
            }
            if lowered.contains("motion") {
                capabilities.insert("motion_detection".to_string(), Value::Bool(true));
            }
            if lowered.contains("audio") {
                capabilities.insert("audio_api".to_string(), Value::Bool(true));
            }
        }
    }

    if let Some(schemas) = doc
        .get("components")
        .and_then(|components| components.get("schemas"))
        .and_then(Value::as_object)
    {
        for name in schemas.keys() {
            if name.to_ascii_lowercase().contains("analytics") {
                capabilities.insert("analytics_schemas".to_string(), Value::Bool(true));
            }
        }
    }

    capabilities
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flags_matching_paths() {
        let doc = json!({
            "paths": {
                "/analytics/scenes": {"get": {}},
                "/motion/regions": {"get": {}},
                "/system/time": {"get": {}}
            }
        });

        let caps = parse_openapi_capabilities(&doc);
        assert_eq!(caps.get("analytics_api"), Some(&json!(true)));
        assert_eq!(caps.get("motion_detection"), Some(&json!(true)));
        assert_eq!(caps.get("audio_api"), None);
        assert_eq!(caps.get("analytics_schemas"), None);
    }

    #[test]
    fn flags_matching_schema_names() {
        let doc = json!({
            "components": {
                "schemas": {
                    "AnalyticsConfig": {"type": "object"},
                    "TimeInfo": {"type": "object"}
                }
            }
        });

        let caps = parse_openapi_capabilities(&doc);
        assert_eq!(caps.get("analytics_schemas"), Some(&json!(true)));
        assert_eq!(caps.len(), 1);
    }

    #[test]
    fn path_matching_is_case_insensitive() {
        let doc = json!({
            "paths": {
                "/Analytics/Scenes": {},
                "/AUDIO/transmit": {}
            }
        });

        let caps = parse_openapi_capabilities(&doc);
        assert_eq!(caps.get("analytics_api"), Some(&json!(true)));
        assert_eq!(caps.get("audio_api"), Some(&json!(true)));
    }

    #[test]
    fn sections_are_independent_and_cumulative() {
        let doc = json!({
            "paths": {
                "/analytics/x": {},
                "/motion/y": {},
                "/audio/z": {}
            },
            "components": {
                "schemas": {"VideoAnalyticsProfile": {}}
            }
        });

        let caps = parse_openapi_capabilities(&doc);
        assert_eq!(caps.len(), 4);
        assert!(caps.values().all(|v| v == &json!(true)));
    }

    #[test]
    fn tolerates_missing_or_malformed_sections() {
        assert!(parse_openapi_capabilities(&json!({})).is_empty());
        assert!(parse_openapi_capabilities(&json!({"paths": []})).is_empty());
        assert!(parse_openapi_capabilities(&json!({"paths": "nope"})).is_empty());
        assert!(parse_openapi_capabilities(&json!({"components": {"schemas": 3}})).is_empty());
        assert!(parse_openapi_capabilities(&json!({"openapi": "3.0.0"})).is_empty());
    }
}
