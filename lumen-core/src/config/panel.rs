//! Panel configuration types
//!
//! Wiring, transport timing and scheduling knobs for one ST7789 panel.
//! Pin identity lives here rather than in the protocol code.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Rgb565;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Two signal roles share one GPIO
    DuplicatePin(SignalRole, SignalRole),
    /// Invalid pin string
    InvalidPin,
    /// Invalid value type or range
    InvalidValue,
    /// Key not recognised in its section
    UnknownKey,
    /// Invalid section header
    InvalidSection,
}

/// Logical role of one of the five signal lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SignalRole {
    /// Serial clock (idles high)
    Clock,
    /// Serial data
    Data,
    /// Command/data select (low = command)
    DataCommand,
    /// Hardware reset (active low)
    Reset,
    /// Backlight enable
    Backlight,
}

/// GPIO numbers of the five signal lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelPinConfig {
    pub clock: u8,
    pub data: u8,
    pub dc: u8,
    pub reset: u8,
    pub backlight: u8,
}

impl Default for PanelPinConfig {
    fn default() -> Self {
        Self {
            clock: 18,
            data: 23,
            dc: 2,
            reset: 4,
            backlight: 15,
        }
    }
}

impl PanelPinConfig {
    /// Pins paired with their roles, in configuration order
    pub const fn roles(&self) -> [(SignalRole, u8); 5] {
        [
            (SignalRole::Clock, self.clock),
            (SignalRole::Data, self.data),
            (SignalRole::DataCommand, self.dc),
            (SignalRole::Reset, self.reset),
            (SignalRole::Backlight, self.backlight),
        ]
    }

    /// Check that no GPIO is assigned to two roles
    pub fn validate(&self) -> Result<(), ConfigError> {
        let roles = self.roles();
        for (i, (role_a, pin_a)) in roles.iter().enumerate() {
            for (role_b, pin_b) in &roles[i + 1..] {
                if pin_a == pin_b {
                    return Err(ConfigError::DuplicatePin(*role_a, *role_b));
                }
            }
        }
        Ok(())
    }
}

/// Bit transport timing policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TransportTiming {
    /// Toggle lines back to back; instruction timing only
    #[default]
    Fast,
    /// Wait `settle_ns` after driving data and after each clock edge
    Conservative { settle_ns: u32 },
}

/// Cooperative yield points during long pixel streams
///
/// A value of zero disables the corresponding yield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct YieldPolicy {
    /// Yield every N colour words during a fill
    pub pixel_interval: u32,
    /// Only fills larger than this many words yield at all
    pub pixel_threshold: u32,
    /// Yield every N characters during a string
    pub char_interval: u16,
}

impl Default for YieldPolicy {
    fn default() -> Self {
        Self {
            pixel_interval: 500,
            pixel_threshold: 1000,
            char_interval: 20,
        }
    }
}

impl YieldPolicy {
    /// Never yield
    pub const fn never() -> Self {
        Self {
            pixel_interval: 0,
            pixel_threshold: 0,
            char_interval: 0,
        }
    }
}

/// Complete panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    /// Signal line wiring
    pub pins: PanelPinConfig,
    /// Transport timing policy
    pub timing: TransportTiming,
    /// Cooperative scheduling knobs
    pub yields: YieldPolicy,
    /// Clear the panel at the end of initialization
    pub clear_on_init: bool,
    /// Colour used by the initial clear
    pub clear_color: Rgb565,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            pins: PanelPinConfig::default(),
            timing: TransportTiming::default(),
            yields: YieldPolicy::default(),
            clear_on_init: true,
            clear_color: Rgb565::BLACK,
        }
    }
}
