//! GPIO output lines
//!
//! Wraps embassy's `Output` so it can implement the `lumen-hal` traits.

use embassy_rp::gpio::Output;

/// Number of user GPIO pins on RP2040
pub const GPIO_COUNT: usize = 30;

/// Push-pull output line owned for the lifetime of the program
pub struct GpioOutput {
    output: Output<'static>,
}

impl GpioOutput {
    /// Wrap an already configured embassy output
    pub fn new(output: Output<'static>) -> Self {
        Self { output }
    }
}

impl lumen_hal::OutputPin for GpioOutput {
    #[inline(always)]
    fn set_high(&mut self) {
        self.output.set_high();
    }

    #[inline(always)]
    fn set_low(&mut self) {
        self.output.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.output.is_set_high()
    }
}
