//! HTTP transport layer shared by the Cloudflare client and the IP resolver.
//!
//! This module provides:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - The transport error taxonomy ([`HttpError`])

mod client;
mod error;
mod http;

/// User-Agent identifying this tool on every outgoing request.
pub const USER_AGENT: &str = concat!(
    "ddns-cf/",
    env!("CARGO_PKG_VERSION"),
    " (github.com/doraemonkeys/ddns-cf)"
);


pub use client::ReqwestClient;
pub use error::HttpError;
pub use http::{HttpClient, HttpRequest, HttpResponse};
