//! Parameter catalog probe.
//!
//! Older firmware exposes everything through the parameter CGI. The probe
//! lists the `root.Properties` tree and translates a fixed set of well-known
//! parameters into capability entries. Parameters absent from the listing
//! set nothing.

use camscout_core::{CapabilityMap, Credentials};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

use crate::client::{StageReport, VapixClient};
use crate::vapix;

/// Property parameters worth surfacing, paired with the capability name
/// they map to. Matching against the listing is case-insensitive.
const PROPERTY_CAPABILITIES: &[(&str, &str)] = &[
    ("root.Properties.PTZ.PTZ", "ptz"),
    ("root.Properties.Audio.Audio", "audio"),
    ("root.Properties.Image.NbrOfViews", "video_channels"),
    ("root.Properties.LocalStorage.LocalStorage", "local_storage"),
    ("root.Properties.PrivacyMask.PrivacyMask", "privacy_mask"),
    ("root.Properties.LightControl.LightControl2", "light_control"),
    ("root.Properties.API.HTTP.Version", "http_api_version"),
];

/// Probe capabilities via the parameter CGI; never fails.
pub async fn probe_via_parameters(
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
    let query = vapix::param_list_query(vapix::PROPERTY_GROUPS);
    match client.get_text(address, &query, credentials).await {
        Ok(body) => StageReport {
            value: capabilities_from_params(&vapix::parse_param_list(&body)),
            contacted: true,
        },
        Err(err) => {
            debug!(device = %address, error = %err, "parameter probe yielded nothing");
            StageReport {
                value: CapabilityMap::new(),
                contacted: !err.is_transport(),
            }
        }
    }
}

fn capabilities_from_params(params: &HashMap<String, String>) -> CapabilityMap {
    let mut capabilities = CapabilityMap::new();
    for (name, value) in params {
        for (parameter, capability) in PROPERTY_CAPABILITIES {
            if name.eq_ignore_ascii_case(parameter) {
                capabilities.insert((*capability).to_string(), translate_value(value));
            }
        }
    }
    capabilities
}

/// Map the CGI's stringly-typed values onto JSON: `yes`/`no` become
/// booleans, integers become numbers, anything else stays a string.
fn translate_value(raw: &str) -> Value {
    if raw.eq_ignore_ascii_case("yes") {
        Value::Bool(true)
    } else if raw.eq_ignore_ascii_case("no") {
        Value::Bool(false)
    } else if let Ok(number) = raw.parse::<i64>() {
        Value::from(number)
    } else {
        Value::String(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn translates_known_parameters() {
        let params = params_of(&[
            ("root.Properties.PTZ.PTZ", "yes"),
            ("root.Properties.Audio.Audio", "no"),
            ("root.Properties.Image.NbrOfViews", "4"),
            ("root.Properties.API.HTTP.Version", "3"),
        ]);

        let caps = capabilities_from_params(&params);
        assert_eq!(caps.get("ptz"), Some(&json!(true)));
        assert_eq!(caps.get("audio"), Some(&json!(false)));
        assert_eq!(caps.get("video_channels"), Some(&json!(4)));
        assert_eq!(caps.get("http_api_version"), Some(&json!(3)));
    }

    #[test]
    fn ignores_unlisted_parameters() {
        let params = params_of(&[
            ("root.Properties.Firmware.Version", "11.5.64"),
            ("root.Network.Bonjour.FriendlyName", "cam"),
        ]);

        assert!(capabilities_from_params(&params).is_empty());
    }

    #[test]
    fn parameter_names_match_case_insensitively() {
        let params = params_of(&[("ROOT.PROPERTIES.PTZ.PTZ", "yes")]);

        let caps = capabilities_from_params(&params);
        assert_eq!(caps.get("ptz"), Some(&json!(true)));
    }

    #[test]
    fn non_numeric_values_stay_strings() {
        let params = params_of(&[("root.Properties.LightControl.LightControl2", "dimmable")]);

        let caps = capabilities_from_params(&params);
        assert_eq!(caps.get("light_control"), Some(&json!("dimmable")));
    }

    #[test]
    fn yes_no_translation_is_case_insensitive() {
        assert_eq!(translate_value("Yes"), json!(true));
        assert_eq!(translate_value("NO"), json!(false));
        assert_eq!(translate_value("-12"), json!(-12));
        assert_eq!(translate_value("1.5"), json!("1.5"));
    }
}
