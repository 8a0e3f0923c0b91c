//! Error types for Cloudflare API operations.

use thiserror::Error;

use super::models::ApiMessage;
use crate::transport::HttpError;

/// Error type for Cloudflare API operations.
///
/// Splits into two families the caller treats differently: transport
/// failures, where the server was never reached (see
/// [`ProviderError::is_transient`]), and application-level failures,
/// where the server answered but not usefully.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The HTTP request failed at the transport level.
    #[error("API request failed: {0}")]
    Http(#[from] HttpError),

    /// The response body was not the expected JSON shape.
    #[error("Failed to decode {what} response: {source}")]
    Decode {
        /// What was being decoded ("zone list", "record update", …)
        what: &'static str,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The update payload could not be serialized.
    #[error("Failed to encode record update: {0}")]
    Encode(#[source] serde_json::Error),

    /// A filtered list query returned no results.
    #[error("No {kind} found matching '{name}'")]
    NotFound {
        /// What was looked up ("zone" or "record")
        kind: &'static str,
        /// The name that was queried
        name: String,
    },

    /// The API answered but reported `success: false` in its envelope.
    #[error("API rejected {what}: {}", join_messages(.errors))]
    Rejected {
        /// The operation that was rejected
        what: &'static str,
        /// Provider-reported errors
        errors: Vec<ApiMessage>,
    },
}

impl ProviderError {
    /// Returns true if the failure is a transient network fault worth
    /// retrying, as opposed to an application-level error.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Http(e) => e.is_transient(),
            Self::Decode { .. } | Self::Encode(_) | Self::NotFound { .. } | Self::Rejected { .. } => {
                false
            }
        }
    }
}

fn join_messages(errors: &[ApiMessage]) -> String {
    if errors.is_empty() {
        return "no error details provided".to_string();
    }
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
