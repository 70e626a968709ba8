//! Panel bring-up
//!
//! Hardware reset followed by the fixed command sequence that takes the
//! controller out of sleep into 16-bit colour with inversion on (the
//! 240x240 modules ship with inverted glass).

use embedded_hal::delay::DelayNs;
use embedded_hal_async::delay::DelayNs as AsyncDelayNs;
use lumen_core::config::{PanelConfig, SignalRole};
use lumen_hal::{OutputPin, PinProvider};

use super::command;
use super::driver::{PanelPins, St7789};
use super::error::InitError;

/// Reset held low for this long
pub const RESET_PULSE_MS: u32 = 10;

/// Wait after releasing reset
pub const RESET_RECOVERY_MS: u32 = 120;

/// Wait after the optional clear at the end of init
pub const CLEAR_SETTLE_MS: u32 = 50;

/// One command of the bring-up sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitStep {
    /// Mnemonic, for logging
    pub name: &'static str,
    pub command: u8,
    /// Single operand byte, if the command takes one
    pub operand: Option<u8>,
    /// Wait after the command; zero means none
    pub wait_ms: u32,
}

impl InitStep {
    const fn new(name: &'static str, command: u8, operand: Option<u8>, wait_ms: u32) -> Self {
        Self {
            name,
            command,
            operand,
            wait_ms,
        }
    }
}

/// Command sequence sent after the hardware reset
pub const INIT_SEQUENCE: [InitStep; 7] = [
    InitStep::new("SWRESET", command::SWRESET, None, 150),
    // Sleep out needs the longest recovery
    InitStep::new("SLPOUT", command::SLPOUT, None, 255),
    InitStep::new("COLMOD", command::COLMOD, Some(command::COLMOD_RGB565), 10),
    InitStep::new("MADCTL", command::MADCTL, Some(command::MADCTL_DEFAULT), 0),
    InitStep::new("INVON", command::INVON, None, 10),
    InitStep::new("NORON", command::NORON, None, 10),
    InitStep::new("DISPON", command::DISPON, None, 100),
];

/// Take one line from the provider, tagging failures with its role
fn take_line<B: PinProvider>(
    provider: &mut B,
    role: SignalRole,
    pin: u8,
    initial_high: bool,
) -> Result<B::Output, InitError> {
    provider
        .take_output(pin, initial_high)
        .map_err(|error| InitError::Pin { role, error })
}

impl<P: OutputPin, S: DelayNs> St7789<P, S> {
    /// Claim the configured lines and bring the panel up
    ///
    /// The pin assignment is checked before any line is claimed, and lines
    /// are claimed in role order at their rest levels. If any of that
    /// fails nothing is sent to the panel.
    pub async fn init<B, D>(
        mut provider: B,
        config: PanelConfig,
        settle: S,
        delay: &mut D,
    ) -> Result<Self, InitError>
    where
        B: PinProvider<Output = P>,
        D: AsyncDelayNs,
    {
        config.pins.validate()?;

        let p = config.pins;
        let pins = PanelPins {
            clock: take_line(&mut provider, SignalRole::Clock, p.clock, true)?,
            data: take_line(&mut provider, SignalRole::Data, p.data, false)?,
            dc: take_line(&mut provider, SignalRole::DataCommand, p.dc, true)?,
            reset: take_line(&mut provider, SignalRole::Reset, p.reset, true)?,
            backlight: take_line(&mut provider, SignalRole::Backlight, p.backlight, true)?,
        };

        #[cfg(feature = "defmt")]
        defmt::info!(
            "ST7789 lines: clock={} data={} dc={} reset={} backlight={}",
            p.clock,
            p.data,
            p.dc,
            p.reset,
            p.backlight
        );

        let mut panel = Self::from_pins(pins, config, settle);
        panel.run_init_sequence(delay).await;
        Ok(panel)
    }

    /// Reset the panel and send the bring-up sequence
    ///
    /// Also used to recover a panel that lost its state. Ends with a clear
    /// when `clear_on_init` is set.
    pub async fn run_init_sequence<D: AsyncDelayNs>(&mut self, delay: &mut D) {
        #[cfg(feature = "defmt")]
        defmt::info!("ST7789 hardware reset");

        self.reset.set_low();
        delay.delay_ms(RESET_PULSE_MS).await;
        self.reset.set_high();
        delay.delay_ms(RESET_RECOVERY_MS).await;

        for step in &INIT_SEQUENCE {
            #[cfg(feature = "defmt")]
            defmt::info!("ST7789 init: {=str}", step.name);

            self.bus.send_command(step.command);
            if let Some(operand) = step.operand {
                self.bus.send_data_byte(operand);
            }
            if step.wait_ms > 0 {
                delay.delay_ms(step.wait_ms).await;
            }
        }

        if self.config.clear_on_init {
            self.clear(self.config.clear_color).await;
            delay.delay_ms(CLEAR_SETTLE_MS).await;
        }

        #[cfg(feature = "defmt")]
        defmt::info!("ST7789 initialized");
    }
}
