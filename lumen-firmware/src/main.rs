//! Lumen - ST7789 Panel Firmware
//!
//! Brings up a 240x240 ST7789 panel wired to plain GPIO lines and runs the
//! self-test pattern. The panel wiring comes from `panel.toml`, embedded at
//! build time.

#![no_std]
#![no_main]

use defmt::{error, info};
use embassy_executor::Spawner;
use lumen_core::config::{parse_config, PanelConfig};
use lumen_hal_rp2040::PinBank;
use {defmt_rtt as _, panic_probe as _};

mod tasks;

/// Embedded panel configuration (compiled into firmware)
/// Edit panel.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../panel.toml");

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Lumen firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();
    let bank = PinBank::new(p);

    spawner.spawn(tasks::heartbeat_task()).unwrap();
    spawner.spawn(tasks::display_task(bank, config)).unwrap();

    info!("All tasks spawned, firmware running");
}

/// Parse the embedded configuration
///
/// `build.rs` has already validated the file, so a failure here means the
/// build-time check and the runtime parser disagree. Falls back to the
/// built-in wiring in that case.
fn load_config() -> PanelConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using default panel configuration");
            PanelConfig::default()
        }
    }
}
