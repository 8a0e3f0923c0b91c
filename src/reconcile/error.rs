//! Error types for reconciliation bootstrap.

use thiserror::Error;

use crate::cloudflare::ProviderError;

/// Fatal startup failure.
///
/// Bootstrap retries transient network errors indefinitely, so by the time
/// one of these surfaces the failure is an application-level problem
/// (misconfiguration, missing zone/record, rejected credentials) that a
/// restart will not fix on its own.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The configured zone could not be resolved.
    #[error("Failed to resolve zone '{zone}': {source}")]
    ZoneLookup {
        /// The configured zone domain
        zone: String,
        /// Underlying provider error
        #[source]
        source: ProviderError,
    },

    /// The configured record could not be resolved.
    #[error("Failed to resolve record '{record}': {source}")]
    RecordLookup {
        /// The configured record name
        record: String,
        /// Underlying provider error
        #[source]
        source: ProviderError,
    },
}
