//! Application execution logic.
//!
//! This module wires the configured components together and drives the
//! reconciliation loop until a shutdown signal arrives.

use std::time::Duration;

use tokio::signal;
use tokio::time::MissedTickBehavior;

use ddns_cf::cloudflare::CloudflareApi;
use ddns_cf::config::ValidatedConfig;
use ddns_cf::reconcile::{Reconciler, StartupError};
use ddns_cf::resolver::HttpIpSource;

/// Per-request timeout for public IP resolution.
const RESOLVER_TIMEOUT: Duration = Duration::from_secs(1);

/// Executes the main application loop.
///
/// This function:
/// 1. Creates the Cloudflare client and the public IP source (two
///    independent HTTP clients with deliberately different lifetimes)
/// 2. Bootstraps the reconciler: zone and record resolution with
///    indefinite retry on transient network failure
/// 3. Runs one reconciliation pass immediately, then repeats on the
///    configured interval until shutdown (Ctrl+C or SIGTERM)
///
/// Passes never overlap: the next interval wait starts only after the
/// current pass has fully returned.
///
/// # Errors
///
/// Returns [`StartupError`] when zone or record resolution fails with a
/// non-transient error; these are configuration/API problems and the
/// process terminates rather than retrying.
pub async fn execute(config: ValidatedConfig) -> Result<(), StartupError> {
    let api = CloudflareApi::new(config.auth.clone());
    let ip_source = HttpIpSource::new(config.resolver_url.clone(), RESOLVER_TIMEOUT);

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    // Startup resolution can block indefinitely on connectivity problems;
    // racing the shutdown signal keeps termination prompt during that wait.
    let mut reconciler = tokio::select! {
        biased;

        () = &mut shutdown => {
            tracing::info!("Shutdown signal received during startup, stopping...");
            return Ok(());
        }

        result = Reconciler::bootstrap(api, ip_source, &config.zone, &config.record) => result?,
    };

    let mut ticker = tokio::time::interval(config.poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;

            () = &mut shutdown => {
                tracing::info!("Shutdown signal received, stopping...");
                return Ok(());
            }

            _ = ticker.tick() => {
                reconciler.tick().await;
            }
        }
    }
}

/// Returns a future that completes when a shutdown signal is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
