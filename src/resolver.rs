//! Public IP discovery over HTTP.
//!
//! Asks a plain-text "what is my IP" endpoint for the caller's current
//! public address. One GET, no retry; retry policy belongs to the
//! reconciliation loop.

use std::net::IpAddr;
use std::time::Duration;

use http::HeaderValue;
use http::header;
use thiserror::Error;
use url::Url;

use crate::transport::{HttpClient, HttpError, HttpRequest, ReqwestClient, USER_AGENT};

/// Error type for public IP resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The HTTP request failed at the transport level.
    #[error("Resolver request failed: {0}")]
    Http(#[from] HttpError),

    /// The response body did not parse as an IP address.
    ///
    /// Carries the raw response text for diagnostics.
    #[error("Resolver returned an invalid IP address: {body:?}")]
    InvalidAddress {
        /// The offending response body, untrimmed
        body: String,
    },
}

/// Trait for discovering the caller's current public IP address.
///
/// # Design
///
/// The reconciliation loop depends on this trait rather than on the HTTP
/// implementation, so tests can script address sequences and failures.
pub trait IpSource: Send + Sync {
    /// Returns the current public IP address.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Http`] on transport failure and
    /// [`ResolveError::InvalidAddress`] when the endpoint answers with
    /// something that is not an IP address.
    fn current_ip(&self) -> impl std::future::Future<Output = Result<IpAddr, ResolveError>> + Send;
}

/// HTTP-based public IP source.
///
/// Expects the endpoint to return the address as the entire response body
/// in plain text (e.g. `https://ifconfig.io/ip`). Either address family is
/// accepted; surrounding whitespace is tolerated.
///
/// # Type Parameters
///
/// - `H`: the HTTP client implementation; defaults to [`ReqwestClient`]
#[derive(Debug)]
pub struct HttpIpSource<H = ReqwestClient> {
    client: H,
    url: Url,
}

impl HttpIpSource<ReqwestClient> {
    /// Creates a production source with its own one-shot HTTP client.
    ///
    /// Calls are infrequent and isolated, so the client disables
    /// connection keep-alive; it is deliberately independent from the
    /// provider API client and its pool.
    #[must_use]
    pub fn new(url: Url, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(0)
            .build()
            .expect("HTTP client construction failed");
        Self::with_client(ReqwestClient::from_client(client), url)
    }
}

impl<H> HttpIpSource<H> {
    /// Creates a source over any [`HttpClient`] implementation.
    pub const fn with_client(client: H, url: Url) -> Self {
        Self { client, url }
    }

    /// Returns the configured endpoint URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

impl<H: HttpClient> IpSource for HttpIpSource<H> {
    async fn current_ip(&self) -> Result<IpAddr, ResolveError> {
        let request = HttpRequest::get(self.url.clone())
            .with_header(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));

        let response = self.client.request(request).await?;

        match response.body_text() {
            Some(text) => parse_ip(text),
            None => Err(ResolveError::InvalidAddress {
                body: String::from_utf8_lossy(&response.body).into_owned(),
            }),
        }
    }
}

/// Trims surrounding whitespace and parses the body as an IP address.
///
/// On failure the error carries the original, untrimmed text.
fn parse_ip(body: &str) -> Result<IpAddr, ResolveError> {
    body.trim()
        .parse()
        .map_err(|_| ResolveError::InvalidAddress {
            body: body.to_string(),
        })
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
