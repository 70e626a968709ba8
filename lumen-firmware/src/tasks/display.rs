//! Display task
//!
//! Claims the panel lines from the pin bank, initializes the controller,
//! runs the self-test, then keeps an uptime line updated at the bottom of
//! the text page.

use defmt::{error, info, warn};
use embassy_time::{Delay, Duration, Instant, Ticker};
use lumen_core::config::PanelConfig;
use lumen_core::status::uptime_line;
use lumen_core::Rgb565;
use lumen_drivers::st7789::St7789;
use lumen_hal_rp2040::PinBank;

/// Uptime line position, between the multi-line block and the footer
const STATUS_X: u16 = 10;
const STATUS_Y: u16 = 205;

/// Status refresh interval in milliseconds
const STATUS_INTERVAL_MS: u64 = 1000;

#[embassy_executor::task]
pub async fn display_task(mut bank: PinBank, config: PanelConfig) {
    info!("Display task started");

    let mut delay = Delay;
    let mut panel = match St7789::init(&mut bank, config, Delay, &mut delay).await {
        Ok(panel) => panel,
        Err(e) => {
            error!("Failed to initialize display: {:?}", e);
            return;
        }
    };
    info!("Display initialized");

    if let Err(e) = panel.run_selftest(&mut delay).await {
        warn!("Self-test aborted: {:?}", e);
    }

    let mut ticker = Ticker::every(Duration::from_millis(STATUS_INTERVAL_MS));
    let start = Instant::now();

    loop {
        ticker.next().await;

        match uptime_line(start.elapsed().as_secs()) {
            Ok(line) => {
                panel
                    .draw_string(STATUS_X, STATUS_Y, &line, Rgb565::GREEN, Rgb565::BLACK)
                    .await
            }
            Err(_) => warn!("Uptime line overflowed"),
        }
    }
}
