//! Visual self-test
//!
//! Solid fills, a colour square pattern and a text page, with pauses long
//! enough to check each stage by eye.

use embedded_hal::delay::DelayNs;
use embedded_hal_async::delay::DelayNs as AsyncDelayNs;
use lumen_core::Rgb565;
use lumen_hal::OutputPin;

use super::driver::St7789;
use super::error::DrawError;

/// Full-screen fills, in order
const FILL_COLORS: [(&str, Rgb565); 5] = [
    ("red", Rgb565::RED),
    ("green", Rgb565::GREEN),
    ("blue", Rgb565::BLUE),
    ("white", Rgb565::WHITE),
    ("black", Rgb565::BLACK),
];

const FILL_PAUSE_MS: u32 = 1000;
const BLANK_PAUSE_MS: u32 = 500;
const PATTERN_PAUSE_MS: u32 = 2000;

const SQUARE_SIZE: u16 = 50;

/// One square per corner plus one in the centre
const SQUARES: [(u16, u16, Rgb565); 5] = [
    (10, 10, Rgb565::RED),
    (180, 10, Rgb565::GREEN),
    (10, 180, Rgb565::BLUE),
    (180, 180, Rgb565::YELLOW),
    (95, 95, Rgb565::WHITE),
];

const TEXT_PAGE: [(u16, u16, &str, Rgb565); 10] = [
    (60, 20, "ST7789 RP2040", Rgb565::WHITE),
    (80, 35, "Display", Rgb565::WHITE),
    (10, 60, "Red Text", Rgb565::RED),
    (10, 75, "Green Text", Rgb565::GREEN),
    (10, 90, "Blue Text", Rgb565::BLUE),
    (10, 105, "Yellow Text", Rgb565::YELLOW),
    (10, 130, "Numbers: 0123456789", Rgb565::WHITE),
    (10, 145, "Special: !@#$%^&*()", Rgb565::WHITE),
    (10, 170, "Line 1\nLine 2\nLine 3", Rgb565::WHITE),
    (50, 220, "Text Demo!", Rgb565::CYAN),
];

impl<P: OutputPin, S: DelayNs> St7789<P, S> {
    /// Run the self-test pattern
    ///
    /// Leaves the text page on screen.
    pub async fn run_selftest<D: AsyncDelayNs>(&mut self, delay: &mut D) -> Result<(), DrawError> {
        for (_name, color) in FILL_COLORS {
            #[cfg(feature = "defmt")]
            defmt::info!("Self-test: full screen {=str}", _name);

            self.clear(color).await;
            delay.delay_ms(FILL_PAUSE_MS).await;
        }

        #[cfg(feature = "defmt")]
        defmt::info!("Self-test: colour squares");

        self.clear(Rgb565::BLACK).await;
        delay.delay_ms(BLANK_PAUSE_MS).await;
        for (x, y, color) in SQUARES {
            self.fill_rect(x, y, SQUARE_SIZE, SQUARE_SIZE, color).await?;
        }
        delay.delay_ms(PATTERN_PAUSE_MS).await;

        #[cfg(feature = "defmt")]
        defmt::info!("Self-test: text page");

        self.clear(Rgb565::BLACK).await;
        for (x, y, text, color) in TEXT_PAGE {
            self.draw_string(x, y, text, color, Rgb565::BLACK).await;
        }

        #[cfg(feature = "defmt")]
        defmt::info!("Self-test complete");

        Ok(())
    }
}
