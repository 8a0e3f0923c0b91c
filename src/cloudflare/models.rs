//! Cloudflare v4 API data model.
//!
//! Only the fields the reconciliation logic reads are modeled as typed
//! struct fields. Everything else the API returns is captured verbatim in a
//! flattened map, so a record fetched from the API can be echoed back on
//! update without dropping provider metadata this tool knows nothing about.

use std::fmt;
use std::net::IpAddr;

use serde::{Deserialize, Serialize};

/// A DNS zone as represented by the Cloudflare API.
///
/// Immutable once fetched; only `id` is used after zone resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Provider-assigned zone identifier
    pub id: String,
    /// Zone domain name
    pub name: String,
    /// Remaining provider metadata (status, name servers, plan, …),
    /// carried opaquely
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A single DNS record within a zone.
///
/// `content` is the only field this tool ever changes. All other fields are
/// read, cached, and echoed back unchanged on update: the API replaces the
/// whole record on overwrite, and omitting a field risks the provider
/// resetting it (e.g. disabling proxying).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Provider-assigned record identifier
    pub id: String,
    /// Identifier of the owning zone
    pub zone_id: String,
    /// Fully-qualified record name
    pub name: String,
    /// Record type ("A")
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record content: the IP address rendered as text
    pub content: String,
    /// Whether traffic for this record is proxied through Cloudflare
    #[serde(default)]
    pub proxied: bool,
    /// Whether the record is locked against modification
    #[serde(default)]
    pub locked: bool,
    /// Time-to-live in seconds (1 = automatic)
    pub ttl: u32,
    /// Remaining provider fields (zone_name, meta, timestamps, tags, …),
    /// carried opaquely
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    /// Returns a copy of this record with only `content` replaced.
    ///
    /// This is the update payload shape the API expects: the previously
    /// fetched record, unchanged except for the new address.
    #[must_use]
    pub fn with_content(&self, address: IpAddr) -> Self {
        let mut updated = self.clone();
        updated.content = address.to_string();
        updated
    }
}

/// The response envelope every Cloudflare endpoint wraps its payload in.
///
/// `result` is null when the API reports an error, so it is optional even
/// for endpoints that return one on success.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// Endpoint payload; absent on provider-reported failure
    pub result: Option<T>,
    /// Provider-reported outcome flag
    pub success: bool,
    /// Provider-reported errors, present when `success` is false
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
    /// Informational messages
    #[serde(default)]
    pub messages: Vec<ApiMessage>,
}

/// A coded message in the `errors`/`messages` arrays of an [`Envelope`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    /// Provider error code
    #[serde(default)]
    pub code: i64,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
}

impl fmt::Display for ApiMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}
