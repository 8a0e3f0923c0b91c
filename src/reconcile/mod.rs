//! The reconciliation core.
//!
//! Owns the process-local state (the cached DNS record and the believed
//! public IP) and drives it through two phases:
//!
//! 1. **Bootstrap**: resolve the configured zone and record once, retrying
//!    indefinitely on transient network failure, then seed the state from
//!    the fetched record.
//! 2. **Steady state**: on every tick, re-resolve the public IP, compare it
//!    against the believed address, and push an update only on drift.
//!
//! State advances only after a confirmed successful provider write, never
//! optimistically, so a failed update is retried on the next tick.

mod error;
mod reconciler;


pub use error::StartupError;
pub use reconciler::Reconciler;
