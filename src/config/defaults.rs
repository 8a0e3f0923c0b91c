//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

/// Default public IP resolver endpoint.
pub const RESOLVER_URL: &str = "https://ifconfig.io/ip";

/// Default reconciliation interval in seconds.
pub const POLL_INTERVAL_SECS: u64 = 10;
