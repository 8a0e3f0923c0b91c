//! The authenticated Cloudflare API client.

use std::time::Duration;

use http::HeaderValue;
use http::header;
use serde::de::DeserializeOwned;
use url::Url;

use super::error::ProviderError;
use super::models::{Envelope, Record, Zone};
use crate::transport::{HttpClient, HttpRequest, HttpResponse, ReqwestClient, USER_AGENT};

/// Cloudflare v4 API base URL.
const API_BASE: &str = "https://api.cloudflare.com/client/v4/";

/// Per-request timeout for API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(3);

/// Idle connections kept around between ticks.
const POOL_MAX_IDLE: usize = 10;

/// How long an idle connection survives in the pool.
const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(30);

/// Only address records are looked up.
const RECORD_TYPE: &str = "A";

/// The DNS provider operations the reconciler depends on.
///
/// # Design
///
/// Abstracting the concrete client lets tests drive the reconciliation
/// logic with mock implementations, the same way [`HttpClient`] lets the
/// client tests avoid the network.
pub trait DnsApi: Send + Sync {
    /// Resolves a zone by its domain name.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::NotFound`] when no active zone matches, or
    /// a transport/decode/rejection error.
    fn find_zone(
        &self,
        domain: &str,
    ) -> impl std::future::Future<Output = Result<Zone, ProviderError>> + Send;

    /// Resolves an address record by zone id and record name.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::NotFound`] when no matching record exists,
    /// or a transport/decode/rejection error.
    fn find_record(
        &self,
        zone_id: &str,
        name: &str,
    ) -> impl std::future::Future<Output = Result<Record, ProviderError>> + Send;

    /// Overwrites a record with the given full representation.
    ///
    /// The caller must pass back every field of the previously fetched
    /// record unchanged except `content`; the endpoint has replace
    /// semantics, not patch semantics.
    ///
    /// # Errors
    ///
    /// Returns a transport, serialization, decode, or rejection error.
    fn update_record(
        &self,
        record: &Record,
    ) -> impl std::future::Future<Output = Result<(), ProviderError>> + Send;
}

/// Authenticated Cloudflare API client.
///
/// Holds one HTTP client reused across ticks (calls repeat on an interval,
/// so a small idle pool pays off) and the pre-built `Authorization` header.
///
/// # Type Parameters
///
/// - `H`: the HTTP client implementation; defaults to [`ReqwestClient`]
///   and is swapped for a mock in tests
pub struct CloudflareApi<H = ReqwestClient> {
    client: H,
    auth: HeaderValue,
}

// The bearer token never appears in Debug output.
impl<H> std::fmt::Debug for CloudflareApi<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudflareApi")
            .field("auth", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl CloudflareApi<ReqwestClient> {
    /// Creates a production client with the API's timeout and pool settings.
    ///
    /// `auth` is the complete `Authorization` header value
    /// (`Bearer <token>`), built and validated by the configuration layer.
    #[must_use]
    pub fn new(auth: HeaderValue) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .pool_max_idle_per_host(POOL_MAX_IDLE)
            .pool_idle_timeout(POOL_IDLE_TIMEOUT)
            .build()
            .expect("HTTP client construction failed");
        Self::with_client(ReqwestClient::from_client(client), auth)
    }
}

impl<H> CloudflareApi<H> {
    /// Creates a client over any [`HttpClient`] implementation.
    ///
    /// Timeout and pooling are then the injected client's concern.
    pub fn with_client(client: H, mut auth: HeaderValue) -> Self {
        auth.set_sensitive(true);
        Self { client, auth }
    }

    /// Builds an API endpoint URL from a path relative to the API base.
    fn endpoint(path: &str) -> Result<Url, ProviderError> {
        Url::parse(API_BASE)
            .and_then(|base| base.join(path))
            .map_err(|e| crate::transport::HttpError::InvalidUrl(e.to_string()).into())
    }

    /// Attaches the headers every API request carries.
    fn authed(&self, request: HttpRequest) -> HttpRequest {
        request
            .with_header(header::AUTHORIZATION, self.auth.clone())
            .with_header(header::USER_AGENT, HeaderValue::from_static(USER_AGENT))
            .with_header(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            )
    }
}

impl<H: HttpClient> CloudflareApi<H> {
    /// Sends a request and decodes the response envelope, failing on a
    /// provider-reported rejection.
    async fn call<T: DeserializeOwned>(
        &self,
        what: &'static str,
        request: HttpRequest,
    ) -> Result<Envelope<T>, ProviderError> {
        let response = self.client.request(self.authed(request)).await?;
        let envelope = decode(what, &response)?;
        ensure_accepted(what, &envelope)?;
        Ok(envelope)
    }
}

impl<H: HttpClient> DnsApi for CloudflareApi<H> {
    async fn find_zone(&self, domain: &str) -> Result<Zone, ProviderError> {
        let mut url = Self::endpoint("zones")?;
        url.query_pairs_mut()
            .append_pair("name", domain)
            .append_pair("status", "active");

        let envelope: Envelope<Vec<Zone>> = self.call("zone list", HttpRequest::get(url)).await?;

        first_match(envelope, "zone", domain)
    }

    async fn find_record(&self, zone_id: &str, name: &str) -> Result<Record, ProviderError> {
        let mut url = Self::endpoint(&format!("zones/{zone_id}/dns_records"))?;
        url.query_pairs_mut()
            .append_pair("name", name)
            .append_pair("type", RECORD_TYPE);

        let envelope: Envelope<Vec<Record>> =
            self.call("record list", HttpRequest::get(url)).await?;

        first_match(envelope, "record", name)
    }

    async fn update_record(&self, record: &Record) -> Result<(), ProviderError> {
        let url = Self::endpoint(&format!(
            "zones/{}/dns_records/{}",
            record.zone_id, record.id
        ))?;
        let body = serde_json::to_vec(record).map_err(ProviderError::Encode)?;

        let _: Envelope<Record> = self
            .call("record update", HttpRequest::put(url).with_body(body))
            .await?;

        Ok(())
    }
}

/// Decodes a response body into the expected envelope shape.
fn decode<T: DeserializeOwned>(
    what: &'static str,
    response: &HttpResponse,
) -> Result<Envelope<T>, ProviderError> {
    serde_json::from_slice(&response.body).map_err(|source| ProviderError::Decode { what, source })
}

/// Fails with [`ProviderError::Rejected`] when the envelope reports
/// `success: false`.
fn ensure_accepted<T>(what: &'static str, envelope: &Envelope<T>) -> Result<(), ProviderError> {
    if envelope.success {
        Ok(())
    } else {
        Err(ProviderError::Rejected {
            what,
            errors: envelope.errors.clone(),
        })
    }
}

/// Takes the first result of a filtered list query.
///
/// The API models zones and records as searchable collections; with the
/// query filters applied, the first match is the record of interest.
/// Duplicate names are not specially handled.
fn first_match<T>(
    envelope: Envelope<Vec<T>>,
    kind: &'static str,
    name: &str,
) -> Result<T, ProviderError> {
    envelope
        .result
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::NotFound {
            kind,
            name: name.to_string(),
        })
}
