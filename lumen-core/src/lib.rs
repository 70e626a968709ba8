//! Board-agnostic core types for the ST7789 panel driver
//!
//! This crate contains everything that does not touch hardware:
//!
//! - RGB565 colour values
//! - Panel geometry and window bounds checks
//! - The 8x8 ASCII font table
//! - Panel configuration types and the `panel.toml` parser
//! - Fixed-capacity status line text

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod color;
pub mod config;
pub mod font;
pub mod geometry;
pub mod status;

pub use color::Rgb565;
pub use geometry::{Rect, PANEL_HEIGHT, PANEL_WIDTH};
