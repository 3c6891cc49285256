//! HTTP transport for device endpoints.
//!
//! One [`VapixClient`] is shared by the fetcher and all probes. Every call
//! is bounded by the configured timeout and runs on its own connection:
//! the pool keeps no idle connections, so each request opens and releases a
//! connection-scoped session regardless of how it exits.

use std::time::Duration;

use camscout_core::Credentials;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::config::DiscoveryConfig;

/// Failure of a single device HTTP call.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, timeout, or transfer failure: the device never gave a
    /// usable answer.
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// The device answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(StatusCode),

    /// The device answered 200 with a body that does not parse.
    #[error("undecodable body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// True when no HTTP status was received at all.
    ///
    /// A `Status` or `Decode` failure still proves the device is reachable;
    /// only transport-level failures count against reachability.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

/// What one discovery stage produced, plus whether the device answered at
/// the HTTP level at all.
///
/// `contacted` is true as soon as any status line was received, even a 401
/// or 404; it feeds the service's reachability verdict and nothing else.
#[derive(Debug)]
pub(crate) struct StageReport<T> {
    pub value: T,
    pub contacted: bool,
}

/// HTTP client for VAPIX-style CGI endpoints.
#[derive(Debug, Clone)]
pub struct VapixClient {
    http: reqwest::Client,
    timeout: Duration,
}

impl VapixClient {
    /// Build a client honoring the configured request timeout.
    pub fn new(config: &DiscoveryConfig) -> Self {
        let http = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .unwrap_or_default();
        Self {
            http,
            timeout: config.request_timeout(),
        }
    }

    pub(crate) fn url(address: &str, path_and_query: &str) -> String {
        format!("http://{}{}", address, path_and_query)
    }

    /// GET an endpoint, requiring a success status.
    async fn get_success(
        &self,
        address: &str,
        path_and_query: &str,
        credentials: &Credentials,
    ) -> Result<reqwest::Response, FetchError> {
        let response = self
            .http
            .get(Self::url(address, path_and_query))
            .basic_auth(&credentials.username, Some(&credentials.password))
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        Ok(response)
    }

    /// GET a JSON endpoint and parse the body.
    pub async fn get_json(
        &self,
        address: &str,
        path_and_query: &str,
        credentials: &Credentials,
    ) -> Result<Value, FetchError> {
        let response = self.get_success(address, path_and_query, credentials).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// GET a plain-text endpoint (parameter listings).
    pub async fn get_text(
        &self,
        address: &str,
        path_and_query: &str,
        credentials: &Credentials,
    ) -> Result<String, FetchError> {
        let response = self.get_success(address, path_and_query, credentials).await?;
        Ok(response.text().await?)
    }

    /// GET an endpoint for its status only.
    ///
    /// Never reads the body (several candidate endpoints stream forever)
    /// and never classifies a non-success status as an error; the caller
    /// decides what the status means. The connection is released when the
    /// response is dropped.
    pub async fn get_status(
        &self,
        address: &str,
        path_and_query: &str,
        credentials: &Credentials,
    ) -> Result<StatusCode, FetchError> {
        let response = self
            .http
            .get(Self::url(address, path_and_query))
            .basic_auth(&credentials.username, Some(&credentials.password))
            .timeout(self.timeout)
            .send()
            .await?;
        Ok(response.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_address_and_path() {
        assert_eq!(
            VapixClient::url("10.0.0.5", "/axis-cgi/basicdeviceinfo.cgi"),
            "http://10.0.0.5/axis-cgi/basicdeviceinfo.cgi"
        );
        assert_eq!(
            VapixClient::url("10.0.0.5:8080", "/axis-cgi/param.cgi?action=list"),
            "http://10.0.0.5:8080/axis-cgi/param.cgi?action=list"
        );
    }

    #[test]
    fn status_and_decode_failures_are_not_transport() {
        let status = FetchError::Status(StatusCode::UNAUTHORIZED);
        assert!(!status.is_transport());

        let decode = FetchError::from(serde_json::from_str::<Value>("not json").unwrap_err());
        assert!(!decode.is_transport());
    }

    #[tokio::test]
    async fn unparseable_url_fails_as_transport() {
        // An empty address makes an invalid URL, which reqwest reports as a
        // client error without touching the network.
        let client = VapixClient::new(&DiscoveryConfig::new());
        let creds = Credentials::new("root", "pass");
        let err = client.get_json("", "", &creds).await.unwrap_err();
        assert!(err.is_transport());
    }
}
