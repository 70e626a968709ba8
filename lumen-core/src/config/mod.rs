//! Panel configuration
//!
//! Types describing how one panel is wired and driven, plus a small no_std
//! parser for the `panel.toml` file embedded in the firmware.

pub mod panel;
pub mod parse;

pub use panel::{
    ConfigError, PanelConfig, PanelPinConfig, SignalRole, TransportTiming, YieldPolicy,
};
pub use parse::{parse_config, DEFAULT_SETTLE_NS};
