//! Glyph and string rendering
//!
//! Characters are drawn as opaque 8x8 cells: every pixel of the cell is
//! written, set bits in the foreground colour and clear bits in the
//! background colour. Strings advance 9 pixels per character and 10 per
//! line.

use embassy_futures::yield_now;
use embedded_hal::delay::DelayNs;
use lumen_core::font::{self, GLYPH_HEIGHT, GLYPH_WIDTH};
use lumen_core::{Rect, Rgb565, PANEL_HEIGHT, PANEL_WIDTH};
use lumen_hal::OutputPin;

use super::driver::St7789;

/// Horizontal advance per character
pub const CHAR_ADVANCE: u16 = GLYPH_WIDTH + 1;

/// Vertical advance per line
pub const LINE_ADVANCE: u16 = GLYPH_HEIGHT + 2;

/// Per-call text cursor
///
/// Kept in `u32` so advancing past the panel edge cannot wrap.
struct TextCursor {
    origin_x: u32,
    x: u32,
    y: u32,
}

impl TextCursor {
    fn new(x: u16, y: u16) -> Self {
        Self {
            origin_x: u32::from(x),
            x: u32::from(x),
            y: u32::from(y),
        }
    }

    /// Check if a full glyph row still fits below the cursor
    fn has_room(&self) -> bool {
        self.y + u32::from(GLYPH_HEIGHT) <= u32::from(PANEL_HEIGHT)
    }

    fn position(&self) -> Option<(u16, u16)> {
        Some((u16::try_from(self.x).ok()?, u16::try_from(self.y).ok()?))
    }

    fn carriage_return(&mut self) {
        self.x = self.origin_x;
    }

    fn newline(&mut self) {
        self.x = self.origin_x;
        self.y += u32::from(LINE_ADVANCE);
    }

    fn advance(&mut self) {
        self.x += u32::from(CHAR_ADVANCE);
        if self.x + u32::from(GLYPH_WIDTH) > u32::from(PANEL_WIDTH) {
            self.newline();
        }
    }
}

impl<P: OutputPin, S: DelayNs> St7789<P, S> {
    /// Draw one character cell with its top-left corner at `(x, y)`
    ///
    /// Characters outside printable ASCII, and cells that would cross the
    /// panel edge, are skipped without touching the wire.
    pub fn draw_char(&mut self, x: u16, y: u16, ch: char, fg: Rgb565, bg: Rgb565) {
        let Some(glyph) = font::glyph(ch) else {
            return;
        };
        let cell = Rect::new(x, y, GLYPH_WIDTH, GLYPH_HEIGHT);
        if !cell.fits_panel() {
            return;
        }

        self.set_window(&cell);
        self.bus.begin_pixels();
        for row in 0..usize::from(GLYPH_HEIGHT) {
            for col in 0..usize::from(GLYPH_WIDTH) {
                let color = if font::glyph_pixel(glyph, row, col) {
                    fg
                } else {
                    bg
                };
                self.bus.push_color(color);
            }
        }
    }

    /// Draw a string starting at `(x, y)`
    ///
    /// `\n` starts a new line at the original `x`, `\r` returns to it on
    /// the same line. Text wraps at the right edge and stops at the first
    /// character whose line would cross the bottom edge. Unsupported
    /// characters take up a cell but draw nothing.
    pub async fn draw_string(&mut self, x: u16, y: u16, text: &str, fg: Rgb565, bg: Rgb565) {
        let interval = usize::from(self.config.yields.char_interval);
        let mut cursor = TextCursor::new(x, y);

        for (processed, ch) in text.chars().enumerate() {
            if !cursor.has_room() {
                break;
            }

            match ch {
                '\n' => cursor.newline(),
                '\r' => cursor.carriage_return(),
                _ => {
                    if let Some((cx, cy)) = cursor.position() {
                        self.draw_char(cx, cy, ch, fg, bg);
                    }
                    cursor.advance();
                }
            }

            if interval > 0 && (processed + 1) % interval == 0 {
                yield_now().await;
            }
        }
    }
}
