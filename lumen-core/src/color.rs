//! RGB565 colour values
//!
//! The panel is configured for 16 bits per pixel (5 red, 6 green, 5 blue).
//! Colours are passed through to the wire unchanged.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pre-packed 16-bit panel colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xFFFF);
    pub const RED: Self = Self(0xF800);
    pub const GREEN: Self = Self(0x07E0);
    pub const BLUE: Self = Self(0x001F);
    pub const YELLOW: Self = Self(0xFFE0);
    pub const CYAN: Self = Self(0x07FF);

    /// Wrap an already packed value
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Packed value as sent on the wire
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Rgb565> for u16 {
    fn from(color: Rgb565) -> Self {
        color.0
    }
}
