//! RP2040-specific HAL for the Lumen panel driver
//!
//! This crate provides RP2040 implementations of the shared `lumen-hal`
//! traits:
//!
//! - Output lines backed by `embassy_rp::gpio::Output`
//! - Dynamic pin allocation for config-driven setup

#![no_std]

pub mod gpio;
pub mod pins;

pub use gpio::{GpioOutput, GPIO_COUNT};
pub use pins::PinBank;

// Re-export shared traits from lumen-hal for convenience
pub use lumen_hal::{OutputPin, PinError, PinProvider};
