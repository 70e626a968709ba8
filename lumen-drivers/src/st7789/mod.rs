//! ST7789 240x240 RGB565 panel over bit-banged GPIO
//!
//! # Layers
//!
//! - [`transport`] - clock/data bit shifting
//! - [`interface`] - DC framing of commands and data
//! - [`St7789`] - addressing window, fills, text, init and self-test
//!
//! # Example
//!
//! ```ignore
//! let mut panel = St7789::init(&mut bank, config, Delay, &mut Delay).await?;
//! panel.fill_rect(10, 10, 50, 50, Rgb565::RED).await?;
//! panel.draw_string(10, 70, "Hello", Rgb565::WHITE, Rgb565::BLACK).await;
//! ```

pub mod command;
mod driver;
mod error;
mod init;
pub mod interface;
mod selftest;
mod text;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use driver::{PanelPins, St7789};
pub use error::{DrawError, InitError};
pub use init::{InitStep, CLEAR_SETTLE_MS, INIT_SEQUENCE, RESET_PULSE_MS, RESET_RECOVERY_MS};
pub use text::{CHAR_ADVANCE, LINE_ADVANCE};
