//! Build script for hexpad-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml at compile time, first as TOML with readable
//!   messages, then with the parser the firmware runs at boot

use std::collections::BTreeMap;
use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// GPIO pins on the RP2040
const GPIO_COUNT: u32 = 30;

/// Sections board.toml may contain
const SECTIONS: &[&str] = &["scan", "buzzer", "display", "pins"];

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
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate board.toml configuration at compile time
fn validate_config() {
    // Re-run if board.toml changes
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds a board.toml describing the pin wiring.     ║\n\
            ║  Please create one in the hexpad-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read board.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in board.toml                        ║\n\
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
    validate_sections(&config, &mut errors);
    validate_scan(&config, &mut errors);
    validate_flags(&config, &mut errors);
    validate_pins(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid board configuration                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    // The firmware falls back to defaults on a parse error, so anything the
    // embedded parser rejects must fail the build here
    if let Err(e) = hexpad_core::config::parse_config(&config_content) {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml rejected by the firmware parser               ║\n\
            ║                                                                  ║\n\
            ║  Error: {:<56} ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format!("{:?}", e)
        );
    }

    println!("cargo:warning=board.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Only known sections, each a table
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(root) = config.as_table() else {
        return;
    };

    for (name, value) in root {
        if !SECTIONS.contains(&name.as_str()) {
            errors.push(format!("unknown section [{}]", name));
        } else if !value.is_table() {
            errors.push(format!("[{}] must be a table", name));
        }
    }
}

/// [scan] debounce_threshold must fit 1-255
fn validate_scan(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(scan) = config.get("scan").and_then(|s| s.as_table()) else {
        return;
    };

    for (key, value) in scan {
        match (key.as_str(), value) {
            ("debounce_threshold", toml::Value::Integer(n)) => {
                if !(1..=255).contains(n) {
                    errors.push("[scan] debounce_threshold must be 1-255".to_string());
                }
            }
            ("debounce_threshold", _) => {
                errors.push("[scan] debounce_threshold must be an integer".to_string());
            }
            _ => errors.push(format!("[scan] unknown key '{}'", key)),
        }
    }
}

/// [buzzer] and [display] hold booleans only
fn validate_flags(config: &toml::Value, errors: &mut Vec<String>) {
    let sections: [(&str, &[&str]); 2] = [
        ("buzzer", &["enabled"]),
        ("display", &["select_active_low", "segments_active_high"]),
    ];

    for (section, keys) in sections {
        let Some(table) = config.get(section).and_then(|s| s.as_table()) else {
            continue;
        };
        for (key, value) in table {
            if !keys.contains(&key.as_str()) {
                errors.push(format!("[{}] unknown key '{}'", section, key));
            } else if !value.is_bool() {
                errors.push(format!("[{}] {} must be true or false", section, key));
            }
        }
    }
}

/// [pins] arrays have the right length, pin strings parse, no pin is shared
fn validate_pins(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(pins) = config.get("pins").and_then(|p| p.as_table()) else {
        return;
    };

    // pin number -> first line using it
    let mut used: BTreeMap<u32, String> = BTreeMap::new();
    let mut claim = |pin: u32, line: String, errors: &mut Vec<String>| {
        if let Some(owner) = used.get(&pin) {
            errors.push(format!("gpio{} used by both {} and {}", pin, owner, line));
        } else {
            used.insert(pin, line);
        }
    };

    for (key, value) in pins {
        let expected = match key.as_str() {
            "select" | "columns" => 4,
            "segments" => 8,
            "buzzer" => {
                match value.as_str().map(parse_pin) {
                    Some(Some(pin)) => claim(pin, "buzzer".to_string(), errors),
                    _ => errors.push("[pins] buzzer must be a pin string like \"gpio18\"".to_string()),
                }
                continue;
            }
            _ => {
                errors.push(format!("[pins] unknown key '{}'", key));
                continue;
            }
        };

        let Some(array) = value.as_array() else {
            errors.push(format!("[pins] {} must be an array", key));
            continue;
        };
        if array.len() != expected {
            errors.push(format!("[pins] {} needs exactly {} pins", key, expected));
        }
        for (i, item) in array.iter().enumerate() {
            match item.as_str().map(parse_pin) {
                Some(Some(pin)) => claim(pin, format!("{}[{}]", key, i), errors),
                _ => errors.push(format!("[pins] {}[{}] is not a valid pin string", key, i)),
            }
        }
    }
}

/// Pin number from "gpioN" with optional "!" then "^" prefixes
fn parse_pin(s: &str) -> Option<u32> {
    let s = s.trim();
    let s = s.strip_prefix('!').unwrap_or(s);
    let s = s.strip_prefix('^').unwrap_or(s);
    let pin: u32 = s.strip_prefix("gpio")?.parse().ok()?;
    (pin < GPIO_COUNT).then_some(pin)
}
