//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Cloudflare credentials and target record
    #[serde(default)]
    pub cloudflare: CloudflareSection,

    /// Public IP resolver configuration
    #[serde(default)]
    pub resolver: ResolverSection,

    /// Reconciliation loop configuration
    #[serde(default)]
    pub monitor: MonitorSection,
}

/// Cloudflare configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CloudflareSection {
    /// API token with DNS edit permission
    pub token: Option<String>,

    /// Domain of the zone the record lives in
    pub zone: Option<String>,

    /// Fully-qualified name of the record to keep updated
    pub record: Option<String>,
}

/// Public IP resolver configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverSection {
    /// Endpoint returning the caller's IP as a plain-text body
    pub url: Option<String>,
}

/// Reconciliation loop configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorSection {
    /// Reconciliation interval in seconds
    pub poll_interval: Option<u64>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# DDNS-CF Configuration File
# Documentation: https://github.com/doraemonkeys/ddns-cf

[cloudflare]
# API token with DNS edit permission for the zone (required)
# token = "your-token-here"

# Domain of the zone the record lives in (required)
# zone = "example.com"

# Fully-qualified name of the record to keep updated (required)
# record = "home.example.com"

[resolver]
# Endpoint returning your public IP as a plain-text body
# url = "https://ifconfig.io/ip"

[monitor]
# Reconciliation interval in seconds (default: 10)
poll_interval = 10
"#
    .to_string()
}
