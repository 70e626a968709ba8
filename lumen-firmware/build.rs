//! Build script for lumen-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates panel.toml at compile time

use std::collections::HashMap;
use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// GPIO count on the RP2040
const GPIO_COUNT: i64 = 30;

const PIN_KEYS: [&str; 5] = ["clock", "data", "dc", "reset", "backlight"];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate panel.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=panel.toml");

    let config_path = Path::new("panel.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: panel.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a panel.toml configuration file.          ║\n\
            ║  Please create one in the lumen-firmware directory.              ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read panel.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in panel.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    match config.get("panel").and_then(|p| p.as_table()) {
        Some(panel) => {
            validate_panel(panel, &mut errors);
            if let Some(pins) = panel.get("pins").and_then(|p| p.as_table()) {
                validate_pins(pins, &mut errors);
            }
            if let Some(yields) = panel.get("yield").and_then(|y| y.as_table()) {
                validate_yield(yields, &mut errors);
            }
        }
        None => errors.push("Missing [panel] section".to_string()),
    }
    for key in config.as_table().into_iter().flat_map(|t| t.keys()) {
        if key != "panel" {
            errors.push(format!("Unknown top-level section or key '{}'", key));
        }
    }

    if !errors.is_empty() {
        report_errors("panel.toml validation failed", &errors);
    }

    println!("cargo:warning=panel.toml validated successfully");
}

/// Validate the [panel] scalar keys
fn validate_panel(panel: &toml::value::Table, errors: &mut Vec<String>) {
    for (key, value) in panel {
        match key.as_str() {
            "pins" | "yield" => {}
            "timing" => match value.as_str() {
                Some("fast") | Some("conservative") => {}
                _ => errors.push("[panel] timing must be \"fast\" or \"conservative\"".to_string()),
            },
            "settle_ns" => check_int_range(value, "[panel] settle_ns", 0, u32::MAX as i64, errors),
            "clear_on_init" => {
                if value.as_bool().is_none() {
                    errors.push("[panel] clear_on_init must be true or false".to_string());
                }
            }
            "clear_color" => {
                check_int_range(value, "[panel] clear_color", 0, u16::MAX as i64, errors)
            }
            other => errors.push(format!("[panel] unknown key '{}'", other)),
        }
    }
}

/// Validate [panel.pins]: known roles, valid GPIOs, no pin used twice
fn validate_pins(pins: &toml::value::Table, errors: &mut Vec<String>) {
    let mut used: HashMap<i64, &str> = HashMap::new();

    for (key, value) in pins {
        if !PIN_KEYS.contains(&key.as_str()) {
            errors.push(format!("[panel.pins] unknown role '{}'", key));
            continue;
        }

        let Some(num) = value
            .as_str()
            .and_then(|s| s.strip_prefix("gpio"))
            .and_then(|n| n.parse::<i64>().ok())
        else {
            errors.push(format!(
                "[panel.pins] {} must be a pin string like \"gpio18\"",
                key
            ));
            continue;
        };

        if !(0..GPIO_COUNT).contains(&num) {
            errors.push(format!(
                "[panel.pins] {} = gpio{} is out of range (0-{})",
                key,
                num,
                GPIO_COUNT - 1
            ));
        }
        if let Some(other) = used.insert(num, key.as_str()) {
            errors.push(format!(
                "[panel.pins] gpio{} is assigned to both '{}' and '{}'",
                num, other, key
            ));
        }
    }
}

/// Validate [panel.yield]
fn validate_yield(yields: &toml::value::Table, errors: &mut Vec<String>) {
    for (key, value) in yields {
        match key.as_str() {
            "pixel_interval" | "pixel_threshold" => check_int_range(
                value,
                &format!("[panel.yield] {}", key),
                0,
                u32::MAX as i64,
                errors,
            ),
            "char_interval" => check_int_range(
                value,
                "[panel.yield] char_interval",
                0,
                u16::MAX as i64,
                errors,
            ),
            other => errors.push(format!("[panel.yield] unknown key '{}'", other)),
        }
    }
}

fn check_int_range(value: &toml::Value, name: &str, min: i64, max: i64, errors: &mut Vec<String>) {
    match value.as_integer() {
        Some(v) if (min..=max).contains(&v) => {}
        Some(v) => errors.push(format!("{} = {} is out of range ({}-{})", name, v, min, max)),
        None => errors.push(format!("{} must be an integer", name)),
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = match line.char_indices().nth(61) {
                Some((cut, _)) if line.chars().count() > 64 => format!("{}...", &line[..cut]),
                _ => line.to_string(),
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Panic with all collected validation errors
fn report_errors(title: &str, errors: &[String]) -> ! {
    let body = errors
        .iter()
        .map(|e| format_error_lines(&format!("- {}", e)))
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
