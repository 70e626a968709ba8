//! ST7789 panel driver
//!
//! Owns the five signal lines and provides the addressing window and the
//! fill primitives the rest of the drawing layer is built on.
//!
//! Every primitive sends its own window (CASET, RASET, RAMWR) before any
//! pixel data. The driver never assumes the panel's write cursor carries
//! over from a previous call.

use embassy_futures::yield_now;
use embedded_hal::delay::DelayNs;
use lumen_core::config::PanelConfig;
use lumen_core::geometry::pixel_in_panel;
use lumen_core::{Rect, Rgb565};
use lumen_hal::OutputPin;

use super::command;
use super::error::DrawError;
use super::interface::Interface;
use super::transport::BitBangTransport;

/// The five signal lines of one panel
pub struct PanelPins<P> {
    pub clock: P,
    pub data: P,
    pub dc: P,
    pub reset: P,
    pub backlight: P,
}

/// Bit-banged ST7789 driver for a 240x240 RGB565 panel
///
/// - `P`: output line type (all five lines share it)
/// - `S`: blocking delay used for transport settle time
pub struct St7789<P, S> {
    pub(super) bus: Interface<P, S>,
    pub(super) reset: P,
    backlight: P,
    pub(super) config: PanelConfig,
}

impl<P: OutputPin, S: DelayNs> St7789<P, S> {
    /// Build a driver from lines that are already configured as outputs
    ///
    /// Puts every line in its rest state (clock high, data low, data mode,
    /// reset released, backlight on). The panel itself is not initialized;
    /// see `run_init_sequence`.
    pub fn from_pins(pins: PanelPins<P>, config: PanelConfig, settle: S) -> Self {
        let PanelPins {
            clock,
            data,
            dc,
            mut reset,
            mut backlight,
        } = pins;

        let transport = BitBangTransport::new(clock, data, settle, config.timing);
        let bus = Interface::new(transport, dc);
        reset.set_high();
        backlight.set_high();

        Self {
            bus,
            reset,
            backlight,
            config,
        }
    }

    /// Give back the signal lines and the settle delay
    pub fn release(self) -> (PanelPins<P>, S) {
        let (transport, dc) = self.bus.release();
        let (clock, data, settle) = transport.release();
        let pins = PanelPins {
            clock,
            data,
            dc,
            reset: self.reset,
            backlight: self.backlight,
        };
        (pins, settle)
    }

    /// Active configuration
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Switch the backlight on or off
    pub fn set_backlight(&mut self, on: bool) {
        self.backlight.set_state(on);
    }

    /// Check if the backlight is on
    pub fn backlight_on(&self) -> bool {
        self.backlight.is_set_high()
    }

    /// Fill the whole panel with one colour
    pub async fn clear(&mut self, color: Rgb565) {
        self.fill_region(Rect::full_panel(), color).await;
    }

    /// Fill a rectangle with one colour
    ///
    /// The window commands do not clamp, so the rectangle is checked
    /// against the panel before anything is sent. Rejected requests put no
    /// bytes on the wire.
    pub async fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Rgb565,
    ) -> Result<(), DrawError> {
        let rect = Rect::new(x, y, width, height);
        if rect.is_empty() {
            return Err(DrawError::EmptyRegion);
        }
        if !rect.fits_panel() {
            return Err(DrawError::OutOfBounds);
        }

        self.fill_region(rect, color).await;
        Ok(())
    }

    /// Set a single pixel
    ///
    /// Coordinates off the panel are ignored.
    pub fn draw_pixel(&mut self, x: u16, y: u16, color: Rgb565) {
        if !pixel_in_panel(x, y) {
            return;
        }

        self.set_window(&Rect::new(x, y, 1, 1));
        self.bus.begin_pixels();
        self.bus.push_color(color);
    }

    /// Stream `rect.area()` copies of `color` into a validated rectangle
    async fn fill_region(&mut self, rect: Rect, color: Rgb565) {
        let pixels = rect.area();
        let yields = self.config.yields;
        let may_yield = yields.pixel_interval > 0 && pixels > yields.pixel_threshold;

        self.set_window(&rect);
        self.bus.begin_pixels();
        for i in 1..=pixels {
            self.bus.push_color(color);
            if may_yield && i % yields.pixel_interval == 0 {
                yield_now().await;
            }
        }
    }

    /// Open an addressing window; the rectangle must already fit the panel
    pub(super) fn set_window(&mut self, rect: &Rect) {
        debug_assert!(rect.fits_panel());

        self.bus.send_command(command::CASET);
        self.bus.send_data_word(rect.x);
        self.bus.send_data_word(rect.x_end());

        self.bus.send_command(command::RASET);
        self.bus.send_data_word(rect.y);
        self.bus.send_data_word(rect.y_end());

        self.bus.send_command(command::RAMWR);
    }
}
