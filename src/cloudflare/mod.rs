//! Cloudflare v4 API client.
//!
//! This module provides:
//! - The API data model ([`Zone`], [`Record`], response envelopes)
//! - The authenticated client ([`CloudflareApi`]) exposing the three
//!   operations the updater needs: zone lookup, record lookup, and
//!   full-record overwrite
//! - The [`DnsApi`] trait that abstracts those operations for testing
//!
//! The client is deliberately thin: it performs one HTTP request per
//! operation and classifies failures, leaving retry policy to the caller.

mod client;
mod error;
mod models;


pub use client::{CloudflareApi, DnsApi};
pub use error::ProviderError;
pub use models::{ApiMessage, Envelope, Record, Zone};
