//! Minimal TOML parser for the panel configuration
//!
//! Handles only the subset used by `panel.toml`. It does NOT support the
//! full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean)
//! - Integers in decimal or `0x` hex, with `_` separators
//! - `[panel]`, `[panel.pins]` and `[panel.yield]` section headers
//! - Comments (# ...)
//!
//! NOT supported:
//! - Multi-line strings, arrays, inline tables
//! - Dotted keys outside section headers

use super::panel::{ConfigError, PanelConfig, TransportTiming};
use crate::color::Rgb565;

/// Settle time used when `timing = "conservative"` has no `settle_ns`
pub const DEFAULT_SETTLE_NS: u32 = 1_000;

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Panel,
    Pins,
    Yield,
}

/// Timing selection as written in the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimingMode {
    Fast,
    Conservative,
}

/// Parse TOML configuration into a `PanelConfig`
///
/// Keys that are not present keep their default values.
pub fn parse_config(input: &str) -> Result<PanelConfig, ConfigError> {
    let mut config = PanelConfig::default();
    let mut section = Section::Root;

    let mut timing_mode = TimingMode::Fast;
    let mut settle_ns = DEFAULT_SETTLE_NS;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        // Skip empty lines and comments
        if line.is_empty() {
            continue;
        }

        // Check for section header
        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = line.split_once('=').ok_or(ConfigError::InvalidValue)?;
        let key = key.trim();
        let value = value.trim();

        match section {
            Section::Root => return Err(ConfigError::UnknownKey),
            Section::Panel => match key {
                "timing" => timing_mode = parse_timing(value)?,
                "settle_ns" => settle_ns = parse_u32(value)?,
                "clear_on_init" => config.clear_on_init = parse_bool(value)?,
                "clear_color" => config.clear_color = Rgb565(parse_u16(value)?),
                _ => return Err(ConfigError::UnknownKey),
            },
            Section::Pins => {
                let pin = parse_pin(value)?;
                match key {
                    "clock" => config.pins.clock = pin,
                    "data" => config.pins.data = pin,
                    "dc" => config.pins.dc = pin,
                    "reset" => config.pins.reset = pin,
                    "backlight" => config.pins.backlight = pin,
                    _ => return Err(ConfigError::UnknownKey),
                }
            }
            Section::Yield => match key {
                "pixel_interval" => config.yields.pixel_interval = parse_u32(value)?,
                "pixel_threshold" => config.yields.pixel_threshold = parse_u32(value)?,
                "char_interval" => config.yields.char_interval = parse_u16(value)?,
                _ => return Err(ConfigError::UnknownKey),
            },
        }
    }

    config.timing = match timing_mode {
        TimingMode::Fast => TransportTiming::Fast,
        TimingMode::Conservative => TransportTiming::Conservative { settle_ns },
    };

    config.pins.validate()?;

    Ok(config)
}

/// Drop a trailing comment, ignoring `#` inside quoted strings
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

fn parse_section_header(header: &str) -> Result<Section, ConfigError> {
    match header.trim() {
        "panel" => Ok(Section::Panel),
        "panel.pins" => Ok(Section::Pins),
        "panel.yield" => Ok(Section::Yield),
        _ => Err(ConfigError::InvalidSection),
    }
}

/// Strip surrounding quotes from a string value
fn parse_string(value: &str) -> Result<&str, ConfigError> {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or(ConfigError::InvalidValue)
}

fn parse_timing(value: &str) -> Result<TimingMode, ConfigError> {
    match parse_string(value)? {
        "fast" => Ok(TimingMode::Fast),
        "conservative" => Ok(TimingMode::Conservative),
        _ => Err(ConfigError::InvalidValue),
    }
}

/// Parse a pin string
///
/// Supports `"gpio18"` (quoted) and `gpio18`.
fn parse_pin(value: &str) -> Result<u8, ConfigError> {
    let value = parse_string(value).unwrap_or(value);
    let num = value.strip_prefix("gpio").ok_or(ConfigError::InvalidPin)?;
    num.parse().map_err(|_| ConfigError::InvalidPin)
}

fn parse_bool(value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidValue),
    }
}

fn parse_u32(value: &str) -> Result<u32, ConfigError> {
    let mut digits = [0u8; 16];
    let mut len = 0;
    for b in value.bytes().filter(|&b| b != b'_') {
        *digits.get_mut(len).ok_or(ConfigError::InvalidValue)? = b;
        len += 1;
    }
    let text = core::str::from_utf8(&digits[..len]).map_err(|_| ConfigError::InvalidValue)?;

    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.map_err(|_| ConfigError::InvalidValue)
}

fn parse_u16(value: &str) -> Result<u16, ConfigError> {
    u16::try_from(parse_u32(value)?).map_err(|_| ConfigError::InvalidValue)
}
