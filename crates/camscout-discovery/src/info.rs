//! Basic device info fetcher.
//!
//! Identity fields come from the JSON device-info endpoint; when the device
//! answers but not usefully (old firmware without the endpoint, garbage
//! body) the parameter CGI serves as the fallback source. Failures never
//! escape this module: the caller gets an empty record at worst.

use std::collections::HashMap;

use camscout_core::Credentials;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::client::{FetchError, StageReport, VapixClient};
use crate::vapix;

/// Identity fields reported by a device. Absent fields stay `None`; the
/// record assembly substitutes `"Unknown"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BasicDeviceInfo {
    /// Product model designation.
    #[serde(default)]
    pub model: Option<String>,
    /// Firmware version string.
    #[serde(default)]
    pub firmware_version: Option<String>,
    /// Hardware or serial identifier.
    #[serde(default)]
    pub hardware_id: Option<String>,
}

impl BasicDeviceInfo {
    /// Translate a parameter listing into the primary endpoint's fields.
    fn from_params(params: &HashMap<String, String>) -> Self {
        Self {
            model: params.get("root.Brand.ProdNbr").cloned(),
            firmware_version: params.get("root.Properties.Firmware.Version").cloned(),
            hardware_id: params
                .get("root.Properties.System.HardwareID")
                .or_else(|| params.get("root.Properties.System.SerialNumber"))
                .cloned(),
        }
    }

    /// True when no field was reported.
    pub fn is_empty(&self) -> bool {
        self.model.is_none() && self.firmware_version.is_none() && self.hardware_id.is_none()
    }
}

/// Fetch identity fields for a device; never fails.
///
/// Network trouble, bad statuses and undecodable bodies all degrade to an
/// empty [`BasicDeviceInfo`].
pub async fn fetch_basic_info(
    client: &VapixClient,
    address: &str,
    credentials: &Credentials,
) -> BasicDeviceInfo {
    fetch_basic_info_report(client, address, credentials)
        .await
        .value
}

/// Fetcher variant that also reports whether the device answered.
pub(crate) async fn fetch_basic_info_report(
    client: &VapixClient,
    address: &str,
    credentials: &Credentials,
) -> StageReport<BasicDeviceInfo> {
    let primary = client
        .get_json(address, vapix::BASIC_DEVICE_INFO, credentials)
        .await
        .and_then(|body| serde_json::from_value::<BasicDeviceInfo>(body).map_err(FetchError::from));

    match primary {
        Ok(info) => {
            debug!(device = %address, "basic device info fetched");
            StageReport {
                value: info,
                contacted: true,
            }
        }
        Err(err) if err.is_transport() => {
            warn!(device = %address, error = %err, "basic info endpoint unreachable");
            StageReport {
                value: BasicDeviceInfo::default(),
                contacted: false,
            }
        }
        Err(err) => {
            // The device answered, just not with usable JSON; the parameter
            // CGI is the secondary source for the same fields.
            debug!(
                device = %address,
                error = %err,
                "basic info endpoint unusable, falling back to parameter listing"
            );
            StageReport {
                value: fetch_info_fallback(client, address, credentials).await,
                contacted: true,
            }
        }
    }
}

/// Identity via the parameter CGI. Degrades to empty on any failure.
async fn fetch_info_fallback(
    client: &VapixClient,
    address: &str,
    credentials: &Credentials,
) -> BasicDeviceInfo {
    let query = vapix::param_list_query(vapix::IDENTITY_GROUPS);
    match client.get_text(address, &query, credentials).await {
        Ok(body) => {
            let info = BasicDeviceInfo::from_params(&vapix::parse_param_list(&body));
            if info.is_empty() {
                debug!(device = %address, "parameter listing held no identity fields");
            }
            info
        }
        Err(err) => {
            warn!(device = %address, error = %err, "parameter fallback failed");
            BasicDeviceInfo::default()
        }
    }
}
