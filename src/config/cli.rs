//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// DDNS-CF: Cloudflare Dynamic DNS updater
///
/// Keeps a single Cloudflare address record pointed at this machine's
/// current public IP.
#[derive(Debug, Parser)]
#[command(name = "ddns-cf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Cloudflare API token with DNS edit permission (required for run mode)
    #[arg(long)]
    pub token: Option<String>,

    /// Domain of the zone the record lives in (required for run mode)
    #[arg(long)]
    pub zone: Option<String>,

    /// Fully-qualified name of the record to keep updated (required for run mode)
    #[arg(long)]
    pub record: Option<String>,

    /// Public IP resolver endpoint returning a plain-text address
    #[arg(long = "resolver-url", value_name = "URL")]
    pub resolver_url: Option<String>,

    /// Reconciliation interval in seconds
    #[arg(long = "poll-interval")]
    pub poll_interval: Option<u64>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for ddns-cf
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "ddns-cf.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
