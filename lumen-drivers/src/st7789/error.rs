//! Driver error types
//!
//! The panel never answers, so nothing can fail once bytes are on the
//! wire. Errors only come from setting the lines up and from requests the
//! driver refuses to send.

use lumen_core::config::{ConfigError, SignalRole};
use lumen_hal::PinError;

/// Initialization failed before the panel was touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError {
    /// Pin assignment is invalid
    Config(ConfigError),
    /// A signal line could not be configured as an output
    Pin { role: SignalRole, error: PinError },
}

impl From<ConfigError> for InitError {
    fn from(e: ConfigError) -> Self {
        InitError::Config(e)
    }
}

/// Drawing request rejected before reaching the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawError {
    /// Region extends past the panel edge
    OutOfBounds,
    /// Region has zero width or height
    EmptyRegion,
}
