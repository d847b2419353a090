//! Build script for tricolor-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates board.toml at compile time, with the `toml` crate and with
//!   the same parser the firmware runs at boot

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tricolor_core::config::{parse_board_config, GPIO_COUNT, MAX_LABEL_LEN, RESERVED_PINS};

const INDICATOR_KEYS: [&str; 3] = ["red", "green", "blue"];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
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

/// Validate board.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    if !config_path.exists() {
        fail(&[
            "ERROR: board.toml not found!",
            "",
            "The firmware embeds board.toml next to Cargo.toml.",
            "Create one with [board] and [indicators] sections.",
        ]);
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail(&["ERROR: Failed to read board.toml", "", &e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            let msg = e.to_string();
            let mut lines = vec!["ERROR: Invalid TOML syntax in board.toml", ""];
            lines.extend(msg.lines());
            fail(&lines);
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_board(&config, &mut errors);
    validate_indicators(&config, &mut errors);

    if errors.is_empty() {
        validate_firmware_parse(&content, &mut errors);
    }

    if !errors.is_empty() {
        let mut lines = vec!["ERROR: Invalid board.toml".to_string(), String::new()];
        lines.extend(errors);
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        fail(&refs);
    }

    println!("cargo:warning=board.toml validated successfully");
}

/// Only sections the firmware parser understands may appear
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(table) = config.as_table() else {
        errors.push("board.toml must be a table".to_string());
        return;
    };
    for (key, value) in table {
        match key.as_str() {
            "board" | "indicators" if value.is_table() => {}
            _ => errors.push(format!("Unknown section or root key '{}'", key)),
        }
    }
}

fn validate_board(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(name) = config.get("board").and_then(|b| b.get("name")) else {
        return;
    };
    match name.as_str() {
        Some(s) if s.len() > MAX_LABEL_LEN => errors.push(format!(
            "board.name '{}' is longer than {} bytes",
            s, MAX_LABEL_LEN
        )),
        Some(_) => {}
        None => errors.push("board.name must be a string".to_string()),
    }
}

fn validate_indicators(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(indicators) = config.get("indicators") else {
        errors.push("Missing [indicators] section".to_string());
        return;
    };

    let mut used: Vec<(u8, &str)> = Vec::new();
    for key in INDICATOR_KEYS {
        let Some(value) = indicators.get(key) else {
            errors.push(format!("indicators.{} is not set", key));
            continue;
        };
        let Some(s) = value.as_str() else {
            errors.push(format!("indicators.{} must be a pin string", key));
            continue;
        };
        let Some(pin) = parse_pin(s) else {
            errors.push(format!(
                "indicators.{} = '{}' is not gpio0..gpio29 (optionally '!' prefixed)",
                key, s
            ));
            continue;
        };
        if RESERVED_PINS.contains(&pin) {
            errors.push(format!("indicators.{} uses gpio{}, reserved for UART0", key, pin));
        }
        if let Some((_, other)) = used.iter().find(|(p, _)| *p == pin) {
            errors.push(format!(
                "indicators.{} and indicators.{} share gpio{}",
                other, key, pin
            ));
        }
        used.push((pin, key));
    }
}

/// Run the boot-time parser and validation over the same text
fn validate_firmware_parse(content: &str, errors: &mut Vec<String>) {
    match parse_board_config(content) {
        Ok(config) => {
            if let Err(e) = config.validate() {
                errors.push(format!("Firmware rejects board.toml: {:?}", e));
            }
        }
        Err(e) => errors.push(format!(
            "Firmware parser rejects board.toml ({:?}); use plain key = \"value\" lines",
            e
        )),
    }
}

/// Parse "gpioN" / "!gpioN" into a pin number
fn parse_pin(s: &str) -> Option<u8> {
    let s = s.trim();
    let s = s.strip_prefix('!').unwrap_or(s);
    let num = s.strip_prefix("gpio")?;
    if num.is_empty() || !num.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let pin: u8 = num.parse().ok()?;
    (pin < GPIO_COUNT).then_some(pin)
}

/// Abort the build with a boxed message
fn fail(lines: &[&str]) -> ! {
    let mut out = String::from("\n");
    out.push_str(&format!("╔{}╗\n", "═".repeat(68)));
    for line in lines {
        let truncated = if line.chars().count() > 64 {
            format!("{}...", line.chars().take(61).collect::<String>())
        } else {
            line.to_string()
        };
        out.push_str(&format!("║  {:<64}  ║\n", truncated));
    }
    out.push_str(&format!("╚{}╝\n", "═".repeat(68)));
    panic!("{}", out);
}
