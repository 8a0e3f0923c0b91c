//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use http::HeaderValue;
use url::Url;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// This struct represents a complete, validated configuration where all
/// required fields are present and all values have been validated.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional
/// TOML config. The function validates all inputs and returns errors for
/// invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Complete `Authorization` header value (`Bearer <token>`), marked
    /// sensitive so it never shows up in logs
    pub auth: HeaderValue,

    /// Domain of the zone the record lives in (required)
    pub zone: String,

    /// Fully-qualified name of the record to keep updated (required)
    pub record: String,

    /// Public IP resolver endpoint
    pub resolver_url: Url,

    /// Reconciliation interval
    pub poll_interval: Duration,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ zone: {}, record: {}, resolver: {}, poll_interval: {}s, token: <redacted> }}",
            self.zone,
            self.record,
            self.resolver_url,
            self.poll_interval.as_secs(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional
    /// TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required fields are missing (`token`, `zone`, `record`)
    /// - The token is not usable as an HTTP header value
    /// - The resolver URL is invalid
    /// - The poll interval is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let auth = Self::resolve_token(cli, toml)?;
        let zone = Self::resolve_zone(cli, toml)?;
        let record = Self::resolve_record(cli, toml)?;
        let resolver_url = Self::resolve_resolver_url(cli, toml)?;
        let poll_interval = Self::resolve_poll_interval(cli, toml)?;

        Ok(Self {
            auth,
            zone,
            record,
            resolver_url,
            poll_interval,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_token(cli: &Cli, toml: Option<&TomlConfig>) -> Result<HeaderValue, ConfigError> {
        // CLI takes precedence; an empty string counts as missing
        let token = cli
            .token
            .as_deref()
            .or_else(|| toml.and_then(|t| t.cloudflare.token.as_deref()))
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                ConfigError::missing(
                    field::TOKEN,
                    "Use --token or set cloudflare.token in config file",
                )
            })?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
            ConfigError::InvalidToken {
                reason: e.to_string(),
            }
        })?;
        auth.set_sensitive(true);
        Ok(auth)
    }

    fn resolve_zone(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        cli.zone
            .as_deref()
            .or_else(|| toml.and_then(|t| t.cloudflare.zone.as_deref()))
            .filter(|z| !z.is_empty())
            .map(ToString::to_string)
            .ok_or_else(|| {
                ConfigError::missing(
                    field::ZONE,
                    "Use --zone or set cloudflare.zone in config file",
                )
            })
    }

    fn resolve_record(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        cli.record
            .as_deref()
            .or_else(|| toml.and_then(|t| t.cloudflare.record.as_deref()))
            .filter(|r| !r.is_empty())
            .map(ToString::to_string)
            .ok_or_else(|| {
                ConfigError::missing(
                    field::RECORD,
                    "Use --record or set cloudflare.record in config file",
                )
            })
    }

    fn resolve_resolver_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let url_str = cli
            .resolver_url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.resolver.url.as_deref()))
            .unwrap_or(defaults::RESOLVER_URL);

        Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })
    }

    fn resolve_poll_interval(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let seconds = cli
            .poll_interval
            .or_else(|| toml.and_then(|t| t.monitor.poll_interval))
            .unwrap_or(defaults::POLL_INTERVAL_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "poll_interval",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
