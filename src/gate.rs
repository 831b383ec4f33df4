//! Session gate
//!
//! Login and navigation to the worker-detail screen are performed by a
//! human operator, outside the automated flow. The gate blocks extraction
//! until that hand-back is observable on the page: a marker element (by
//! default the worker name field) becomes present. A marker that never
//! appears fails the whole run; nothing is extracted against an
//! unconfirmed page.

use crate::error::{GateError, Result};
use crate::page::PageSurface;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Interval between marker checks
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Blocking precondition on the page state
pub struct SessionGate;

impl SessionGate {
    /// Wait until `marker` resolves to a present element
    ///
    /// Returns immediately when the marker is already present. Fails with
    /// [`GateError::SessionTimeout`] once `timeout_ms` has elapsed without
    /// the marker appearing. Probe errors are treated as "not yet
    /// present"; only the clock fails the wait.
    #[instrument(skip(page))]
    pub async fn await_ready<P: PageSurface>(
        page: &P,
        marker: &str,
        timeout_ms: u64,
    ) -> Result<()> {
        let start = Instant::now();
        let deadline = start + Duration::from_millis(timeout_ms);

        loop {
            if page.is_present(marker).await.unwrap_or(false) {
                debug!(
                    "Marker {} present after {}ms",
                    marker,
                    start.elapsed().as_millis()
                );
                return Ok(());
            }

            let now = Instant::now();
            if now >= deadline {
                info!(
                    "Gave up waiting for {} after {}ms",
                    marker,
                    start.elapsed().as_millis()
                );
                return Err(GateError::SessionTimeout {
                    marker: marker.to_string(),
                    waited_ms: timeout_ms,
                }
                .into());
            }

            tokio::time::sleep(POLL_INTERVAL.min(deadline - now)).await;
        }
    }
}
