//! Lumen Hardware Abstraction Layer
//!
//! This crate defines the signal-line traits the panel driver is written
//! against. Chip-specific HALs (RP2040, ...) implement them so the same
//! protocol code runs on different boards and on the host in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  lumen-drivers (ST7789 protocol)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lumen-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  lumen-hal-   │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output line
//! - [`gpio::PinProvider`] - Hands out configured output lines by number

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

// Re-export key traits at crate root for convenience
pub use gpio::{OutputPin, PinError, PinProvider};
