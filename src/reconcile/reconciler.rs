//! Reconciliation state and the per-tick pass.

use std::net::IpAddr;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::error::StartupError;
use crate::cloudflare::{DnsApi, ProviderError, Record};
use crate::resolver::IpSource;
use crate::time::{Sleeper, TokioSleeper};

/// Delay between startup resolution retries on transient network failure.
const STARTUP_RETRY_DELAY: Duration = Duration::from_secs(3);

/// The reconciliation loop's state and logic.
///
/// Holds the cached record (the full representation needed to construct
/// update requests) and the believed public IP. Both belong exclusively to
/// this struct; nothing else reads or mutates them.
///
/// `believed_ip` is `None` when there is no prior observation, either
/// because the fetched record's content did not parse as an address or
/// because no successful comparison has happened yet. Absent never equals a
/// resolved address, so the first tick after such a seed always issues an
/// update.
///
/// # Type Parameters
///
/// - `A`: the DNS provider API
/// - `I`: the public IP source
#[derive(Debug)]
pub struct Reconciler<A, I> {
    api: A,
    ip_source: I,
    record: Record,
    believed_ip: Option<IpAddr>,
}

impl<A, I> Reconciler<A, I>
where
    A: DnsApi,
    I: IpSource,
{
    /// Resolves the configured zone and record and seeds the state.
    ///
    /// Transient network failures are retried indefinitely with a fixed
    /// backoff: without a resolved zone and record the process has no
    /// useful work to do, and connectivity problems at boot are expected
    /// (e.g. starting before the network is up).
    ///
    /// # Errors
    ///
    /// Returns [`StartupError`] on any non-transient failure; these are
    /// configuration or API problems, not faults worth waiting out.
    pub async fn bootstrap(
        api: A,
        ip_source: I,
        zone: &str,
        record: &str,
    ) -> Result<Self, StartupError> {
        Self::bootstrap_with_sleeper(api, ip_source, TokioSleeper, zone, record).await
    }

    /// [`Reconciler::bootstrap`] with an injected sleeper, for tests.
    pub async fn bootstrap_with_sleeper(
        api: A,
        ip_source: I,
        sleeper: impl Sleeper,
        zone: &str,
        record: &str,
    ) -> Result<Self, StartupError> {
        let resolved_zone = retry_transient(&sleeper, "zone lookup", || api.find_zone(zone))
            .await
            .map_err(|source| StartupError::ZoneLookup {
                zone: zone.to_string(),
                source,
            })?;
        debug!("Resolved zone {} -> {}", resolved_zone.name, resolved_zone.id);

        let resolved_record = retry_transient(&sleeper, "record lookup", || {
            api.find_record(&resolved_zone.id, record)
        })
        .await
        .map_err(|source| StartupError::RecordLookup {
            record: record.to_string(),
            source,
        })?;

        let believed_ip = match resolved_record.content.parse::<IpAddr>() {
            Ok(ip) => Some(ip),
            Err(_) => {
                // Treated as "no prior observation"; the first tick will
                // update the record with whatever the resolver reports.
                debug!(
                    "Record {} content {:?} is not an IP address",
                    resolved_record.name, resolved_record.content
                );
                None
            }
        };

        info!(
            "Managing record {} (currently {})",
            resolved_record.name, resolved_record.content
        );

        Ok(Self {
            api,
            ip_source,
            record: resolved_record,
            believed_ip,
        })
    }

    /// Runs one reconciliation pass.
    ///
    /// Every failure is handled here: the pass is skipped, state is left
    /// untouched, and the next scheduled tick retries naturally. A failed
    /// update in particular keeps the believed IP stale on purpose, so the
    /// same update is attempted again (at-least-once delivery).
    pub async fn tick(&mut self) {
        let resolved = match self.ip_source.current_ip().await {
            Ok(ip) => ip,
            Err(e) => {
                warn!("Public IP resolution failed, skipping pass: {e}");
                return;
            }
        };

        if self.believed_ip == Some(resolved) {
            debug!(
                "Record {} is pointing to {resolved} (up to date)",
                self.record.name
            );
            return;
        }

        let update = self.record.with_content(resolved);
        info!("Updating record {} to {resolved}", self.record.name);

        match self.api.update_record(&update).await {
            Ok(()) => {
                // The update payload is the new ground truth.
                self.record = update;
                self.believed_ip = Some(resolved);
            }
            Err(e) => {
                warn!("Failed to update record {}: {e}", self.record.name);
            }
        }
    }

    /// The believed public IP, if any observation exists.
    #[must_use]
    pub const fn believed_ip(&self) -> Option<IpAddr> {
        self.believed_ip
    }

    /// The cached record state.
    #[must_use]
    pub const fn record(&self) -> &Record {
        &self.record
    }
}

/// Retries an operation indefinitely while it fails with transient network
/// errors; any other outcome is returned to the caller.
async fn retry_transient<T, F, Fut>(
    sleeper: &impl Sleeper,
    what: &str,
    mut operation: F,
) -> Result<T, ProviderError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ProviderError>>,
{
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_transient() => {
                warn!(
                    "Internet connection problem during {what}, retrying in {}s: {e}",
                    STARTUP_RETRY_DELAY.as_secs()
                );
                sleeper.sleep(STARTUP_RETRY_DELAY).await;
            }
            Err(e) => return Err(e),
        }
    }
}
