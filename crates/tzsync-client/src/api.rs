//! Typed access to the TimeZoneDB `list-time-zone` and `get-time-zone`
//! endpoints.

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;

use tzsync_core::config::ApiConfig;
use tzsync_core::record::{ZoneInterval, ZoneSummary};

use crate::error::{ClientError, ClientResult};

const LIST_FIELDS: &str = "countryCode,countryName,zoneName,gmtOffset,dst";
const DETAIL_FIELDS: &str = "zoneName,zoneStart,zoneEnd,countryCode,countryName,gmtOffset,dst";

/// Client for the TimeZoneDB v2.1 API.
#[derive(Debug, Clone)]
pub struct TimeZoneDbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TimeZoneDbClient {
    /// ## Summary
    /// Builds a client from the API configuration.
    ///
    /// ## Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.key.clone(),
        })
    }

    /// ## Summary
    /// Fetches every zone known to the upstream.
    ///
    /// ## Errors
    /// Returns an error on transport failure or an upstream failure
    /// envelope (rate limit, bad key).
    #[tracing::instrument(skip(self))]
    pub async fn list_time_zones(&self) -> ClientResult<Vec<ZoneSummary>> {
        let response = self
            .http
            .get(format!("{}/list-time-zone", self.base_url))
            .query(&[
                ("key", self.api_key.as_str()),
                ("format", "json"),
                ("fields", LIST_FIELDS),
            ])
            .send()
            .await?;

        let payload = Self::into_payload(response).await?;
        let zones: Vec<ZoneSummary> = match payload.get("zones") {
            Some(zones) => serde_json::from_value(zones.clone())?,
            None => Vec::new(),
        };

        tracing::debug!(zone_count = zones.len(), "Zone list fetched");
        Ok(zones)
    }

    /// ## Summary
    /// Fetches the current offset/DST interval for one zone.
    ///
    /// Open-ended intervals come back without `zoneStart`/`zoneEnd`; the
    /// record is normalized so both bounds are always present.
    ///
    /// ## Errors
    /// Returns an error on transport failure or an upstream failure
    /// envelope.
    #[tracing::instrument(skip(self))]
    pub async fn zone_detail(&self, zone_name: &str) -> ClientResult<ZoneInterval> {
        let response = self
            .http
            .get(format!("{}/get-time-zone", self.base_url))
            .query(&[
                ("key", self.api_key.as_str()),
                ("format", "json"),
                ("by", "zone"),
                ("zone", zone_name),
                ("fields", DETAIL_FIELDS),
            ])
            .send()
            .await?;

        let payload = Self::into_payload(response).await?;
        let interval: ZoneInterval = serde_json::from_value(payload)?;

        Ok(interval.normalized())
    }

    async fn into_payload(response: reqwest::Response) -> ClientResult<Value> {
        let status = response.status();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);
        let body = response.text().await?;

        extract_payload(status, content_type.as_deref(), &body)
    }
}

/// ## Summary
/// Unwraps the TimeZoneDB response envelope.
///
/// Failures can arrive as a non-success HTTP status or as a 200 whose
/// body carries `status: "FAILED"`; both resolve to the upstream
/// `message` when one is present. Bodies that are not JSON at all (some
/// proxies answer errors with HTML) fall back to the HTTP status reason.
///
/// ## Errors
/// Returns `ClientError::Api` for any failure envelope and
/// `ClientError::Decode` for a JSON body that does not parse.
pub(crate) fn extract_payload(
    status: StatusCode,
    content_type: Option<&str>,
    body: &str,
) -> ClientResult<Value> {
    let is_json = content_type.is_some_and(|value| value.contains("application/json"));

    if !is_json {
        return Err(ClientError::Api(
            status
                .canonical_reason()
                .unwrap_or("unknown HTTP failure")
                .to_string(),
        ));
    }

    let payload: Value = serde_json::from_str(body)?;
    let envelope_ok = payload.get("status").and_then(Value::as_str) == Some("OK");

    if !status.is_success() || !envelope_ok {
        let message = payload
            .get("message")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .unwrap_or("No error message in response");
        return Err(ClientError::Api(message.to_string()));
    }

    Ok(payload)
}
