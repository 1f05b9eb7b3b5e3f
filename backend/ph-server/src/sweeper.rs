//! Periodic removal of expired verification records.

use ph_identity::OtpController;

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Spawn a task that purges expired records every `interval`.
///
/// Returns `None` when `interval` is zero. Failed sweeps are logged and the
/// loop carries on.
pub fn spawn(controller: Arc<OtpController>, interval: Duration) -> Option<JoinHandle<()>> {
    if interval.is_zero() {
        log::info!("Expired OTP sweeper disabled");
        return None;
    }

    log::info!("Expired OTP sweeper running every {}s", interval.as_secs());

    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            match controller.purge_expired().await {
                Ok(0) => {}
                Ok(removed) => log::info!("Purged {} expired verifications", removed),
                Err(e) => log::warn!("Expired OTP sweep failed: {}", e),
            }
        }
    }))
}
