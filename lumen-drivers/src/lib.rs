//! Display driver implementations
//!
//! This crate provides the protocol side of the panel driver, written
//! against the `lumen-hal` traits so it runs on any board and on the host:
//!
//! - Bit-serial transport over two GPIO lines
//! - ST7789 command/data framing and initialization
//! - Drawing primitives (pixel, rectangle, glyph, string)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod st7789;
