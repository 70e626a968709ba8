//! ST7789 command opcodes and operands

/// Software reset
pub const SWRESET: u8 = 0x01;
/// Sleep out
pub const SLPOUT: u8 = 0x11;
/// Normal display mode on
pub const NORON: u8 = 0x13;
/// Display inversion on
pub const INVON: u8 = 0x21;
/// Display on
pub const DISPON: u8 = 0x29;
/// Column address set (start word, end word)
pub const CASET: u8 = 0x2A;
/// Row address set (start word, end word)
pub const RASET: u8 = 0x2B;
/// Memory write; every following data byte is pixel data
pub const RAMWR: u8 = 0x2C;
/// Memory data access control
pub const MADCTL: u8 = 0x36;
/// Interface pixel format
pub const COLMOD: u8 = 0x3A;

/// COLMOD operand: 16 bits per pixel, RGB565
pub const COLMOD_RGB565: u8 = 0x55;

/// MADCTL operand: top-to-bottom, left-to-right, RGB order
pub const MADCTL_DEFAULT: u8 = 0x00;
