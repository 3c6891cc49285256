//! Endpoint feature probe.
//!
//! Last-resort strategy for devices that expose neither an OpenAPI document
//! nor a useful parameter listing: issue cheap GETs against a short list of
//! well-known endpoints and record the ones that answer with success. Only
//! positive findings are recorded; a refusal or error proves nothing.

use camscout_core::{CapabilityMap, Credentials};
use futures::{stream, StreamExt};
use serde_json::Value;
use tracing::debug;

use crate::client::{StageReport, VapixClient};

/// Candidate endpoints and the capability each one demonstrates. Streaming
/// endpoints are checked by status only; bodies are never read.
const FEATURE_ENDPOINTS: &[(&str, &str)] = &[
    ("mjpeg_stream", "/axis-cgi/mjpg/video.cgi"),
    ("ptz_control", "/axis-cgi/com/ptz.cgi?query=position"),
    ("audio_stream", "/axis-cgi/audio/receive.cgi"),
    ("edge_recording", "/axis-cgi/record/list.cgi?recordingid=all"),
];

/// Probe capabilities by knocking on well-known endpoints; never fails.
pub async fn probe_via_features(
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
    let checks = stream::iter(FEATURE_ENDPOINTS.iter().map(|(capability, path)| async move {
        (*capability, client.get_status(address, path, credentials).await)
    }))
    .buffer_unordered(FEATURE_ENDPOINTS.len())
    .collect::<Vec<_>>()
    .await;

    let mut report = StageReport {
        value: CapabilityMap::new(),
        contacted: false,
    };
    for (capability, outcome) in checks {
        match outcome {
            Ok(status) => {
                report.contacted = true;
                if status.is_success() {
                    report.value.insert(capability.to_string(), Value::Bool(true));
                }
            }
            Err(err) => {
                debug!(device = %address, capability, error = %err, "feature check failed");
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn candidate_capabilities_are_distinct() {
        let names: HashSet<_> = FEATURE_ENDPOINTS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), FEATURE_ENDPOINTS.len());
    }

    #[test]
    fn candidate_paths_are_absolute() {
        assert!(FEATURE_ENDPOINTS.iter().all(|(_, path)| path.starts_with('/')));
    }
}
