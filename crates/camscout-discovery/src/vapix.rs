//! VAPIX wire knowledge: fixed endpoint paths and the parameter-listing
//! format shared by the info fetcher and the parameter probe.

use std::collections::HashMap;

/// Primary device-identity endpoint (JSON).
pub const BASIC_DEVICE_INFO: &str = "/axis-cgi/basicdeviceinfo.cgi";

/// Self-describing API document endpoint (OpenAPI JSON).
pub const OPENAPI_DOC: &str = "/axis-cgi/openapi.json";

/// Parameter-listing CGI (plain text, `name=value` lines).
pub const PARAM_CGI: &str = "/axis-cgi/param.cgi";

/// Parameter groups holding device identity, for the basic-info fallback.
pub const IDENTITY_GROUPS: &str = "root.Brand,root.Properties.Firmware,root.Properties.System";

/// Parameter group holding capability properties, for the parameter probe.
pub const PROPERTY_GROUPS: &str = "root.Properties";

/// Path and query for listing the given parameter groups.
pub fn param_list_query(groups: &str) -> String {
    format!("{}?action=list&group={}", PARAM_CGI, groups)
}

/// Parse a parameter listing into a name→value map.
///
/// The device emits one `root.Group.Name=value` pair per line. Values may
/// themselves contain `=`, so only the first one splits. Blank lines and
/// lines without a separator are skipped; a repeated name keeps the last
/// value seen.
pub fn parse_param_list(body: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for line in body.lines() {
        let Some((name, value)) = line.split_once('=') else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        params.insert(name.to_string(), value.trim().to_string());
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_typical_listing() {
        let body = "root.Brand.ProdNbr=AXIS M3045-V\n\
                    root.Properties.Firmware.Version=9.80.1\n\
                    root.Properties.System.SerialNumber=ACCC8E012345\n";
        let params = parse_param_list(body);
        assert_eq!(params.len(), 3);
        assert_eq!(
            params.get("root.Brand.ProdNbr").map(String::as_str),
            Some("AXIS M3045-V")
        );
        assert_eq!(
            params.get("root.Properties.Firmware.Version").map(String::as_str),
            Some("9.80.1")
        );
    }

    #[test]
    fn skips_blank_and_malformed_lines() {
        let body = "\n# some notice\nroot.Properties.PTZ.PTZ=yes\n=orphan value\n";
        let params = parse_param_list(body);
        assert_eq!(params.len(), 1);
        assert_eq!(
            params.get("root.Properties.PTZ.PTZ").map(String::as_str),
            Some("yes")
        );
    }

    #[test]
    fn splits_on_first_equals_only() {
        let params = parse_param_list("root.Image.I0.Text=exposure=auto");
        assert_eq!(
            params.get("root.Image.I0.Text").map(String::as_str),
            Some("exposure=auto")
        );
    }

    #[test]
    fn later_duplicate_wins() {
        let params = parse_param_list("root.A.B=1\nroot.A.B=2");
        assert_eq!(params.get("root.A.B").map(String::as_str), Some("2"));
    }

    #[test]
    fn builds_list_query() {
        assert_eq!(
            param_list_query("root.Properties"),
            "/axis-cgi/param.cgi?action=list&group=root.Properties"
        );
    }
}
