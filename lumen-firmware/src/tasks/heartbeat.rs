//! Heartbeat task
//!
//! Logs uptime at a fixed interval. Gaps in the log mean some task held
//! the executor for too long.

use defmt::{debug, info};
use embassy_time::{Duration, Instant, Ticker};

/// Heartbeat interval in milliseconds
pub const HEARTBEAT_MS: u64 = 1000;

#[embassy_executor::task]
pub async fn heartbeat_task() {
    info!("Heartbeat task started");

    let mut ticker = Ticker::every(Duration::from_millis(HEARTBEAT_MS));
    let start = Instant::now();

    loop {
        ticker.next().await;
        debug!("Heartbeat: {} ms", start.elapsed().as_millis());
    }
}
