//! Minimal TOML parser for the board configuration
//!
//! Handles only the subset `board.toml` needs, not full TOML.
//!
//! Supported features:
//! - Key = value pairs (quoted or bare strings)
//! - [section] headers
//! - Comments (# ...), including trailing comments
//!
//! Unknown keys are ignored. Unknown sections are rejected.

use heapless::String;

use super::hardware::{BoardConfig, PinConfig, GPIO_COUNT, MAX_LABEL_LEN};
use crate::state::Line;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid or unknown section header
    InvalidSection,
    /// Line is neither a header, a comment nor `key = value`
    InvalidLine,
    /// Invalid value type
    InvalidValue,
    /// Invalid pin string
    InvalidPin,
    /// Board name exceeds the label capacity
    LabelTooLong,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Board,
    Indicators,
}

/// Parse TOML text into a [`BoardConfig`]
///
/// Keys that are absent keep their defaults. The result is not validated;
/// call [`BoardConfig::validate`] afterwards.
pub fn parse_board_config(input: &str) -> Result<BoardConfig, ParseError> {
    let mut config = BoardConfig::new();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            section = parse_section_header(line)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine)?;
        apply_value(section, key, value, &mut config)?;
    }

    Ok(config)
}

/// Parse a section header like "[indicators]"
fn parse_section_header(line: &str) -> Result<Section, ParseError> {
    let line = strip_comment(line);
    let header = line
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or(ParseError::InvalidSection)?;

    match header.trim() {
        "board" => Ok(Section::Board),
        "indicators" => Ok(Section::Indicators),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = strip_comment(line[eq_pos + 1..].trim());

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Remove a trailing `# comment` that is not inside a string
fn strip_comment(value: &str) -> &str {
    let mut quote = None;
    for (i, c) in value.char_indices() {
        match (c, quote) {
            ('"' | '\'', None) => quote = Some(c),
            (c, Some(q)) if c == q => quote = None,
            ('#', None) => return value[..i].trim(),
            _ => {}
        }
    }
    value
}

/// Parse a string value (removes quotes)
///
/// Accepts basic (`"..."`) and literal (`'...'`) strings. Escapes are not
/// interpreted; pin strings and board names never need them.
fn parse_string(value: &str) -> Result<&str, ParseError> {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            let inner = &value[1..value.len() - 1];
            if inner.contains(quote) {
                return Err(ParseError::InvalidValue);
            }
            return Ok(inner);
        }
    }
    if value.contains(['"', '\'']) {
        Err(ParseError::InvalidValue)
    } else {
        // Allow unquoted strings for simple values
        Ok(value)
    }
}

/// Parse a pin string like "gpio2" or "!gpio2"
fn parse_pin(value: &str) -> Result<PinConfig, ParseError> {
    let value = parse_string(value)?.trim();

    let (value, inverted) = match value.strip_prefix('!') {
        Some(rest) => (rest, true),
        None => (value, false),
    };

    let num = value.strip_prefix("gpio").ok_or(ParseError::InvalidPin)?;
    // Reject signs and whitespace that `parse` would otherwise tolerate
    if num.is_empty() || !num.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidPin);
    }
    let pin: u8 = num.parse().map_err(|_| ParseError::InvalidPin)?;
    if pin >= GPIO_COUNT {
        return Err(ParseError::InvalidPin);
    }

    Ok(PinConfig { pin, inverted })
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut BoardConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Root => {} // Nothing lives at the root yet
        Section::Board => {
            if key == "name" {
                let name = parse_string(value)?;
                config.name =
                    String::<MAX_LABEL_LEN>::try_from(name).map_err(|_| ParseError::LabelTooLong)?;
            }
        }
        Section::Indicators => {
            let line = match key {
                "red" => Line::Red,
                "green" => Line::Green,
                "blue" => Line::Blue,
                _ => return Ok(()), // Ignore unknown keys
            };
            *config.indicators.pin_mut(line) = parse_pin(value)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pin() {
        let pin = parse_pin("gpio11").unwrap();
        assert_eq!(pin.pin, 11);
        assert!(!pin.inverted);

        let pin = parse_pin("!gpio12").unwrap();
        assert_eq!(pin.pin, 12);
        assert!(pin.inverted);

        let pin = parse_pin("\"!gpio5\"").unwrap();
        assert_eq!(pin.pin, 5);
        assert!(pin.inverted);

        assert_eq!(parse_pin("gpio30"), Err(ParseError::InvalidPin));
        assert_eq!(parse_pin("pin11"), Err(ParseError::InvalidPin));
        assert_eq!(parse_pin("gpio+4"), Err(ParseError::InvalidPin));
        assert_eq!(parse_pin("gpio"), Err(ParseError::InvalidPin));
    }

    #[test]
    fn test_parse_section_header() {
        assert_eq!(parse_section_header("[board]"), Ok(Section::Board));
        assert_eq!(
            parse_section_header("[ indicators ] # wiring"),
            Ok(Section::Indicators)
        );
        assert_eq!(
            parse_section_header("[stepper spin]"),
            Err(ParseError::InvalidSection)
        );
        assert_eq!(parse_section_header("[board"), Err(ParseError::InvalidSection));
    }

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("\"gpio2\" # red"), "\"gpio2\"");
        assert_eq!(strip_comment("\"a#b\""), "\"a#b\"");
        assert_eq!(strip_comment("'gpio2' # red"), "'gpio2'");
        assert_eq!(strip_comment("'a#b'"), "'a#b'");
        assert_eq!(strip_comment("'say \"hi\"' # x"), "'say \"hi\"'");
    }

    #[test]
    fn test_parse_string_quote_forms() {
        assert_eq!(parse_string("\"bench\""), Ok("bench"));
        assert_eq!(parse_string("'bench'"), Ok("bench"));
        assert_eq!(parse_string("bench"), Ok("bench"));
        assert_eq!(parse_string("\"bench'"), Err(ParseError::InvalidValue));
        assert_eq!(parse_string("'be'nch'"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_literal_strings() {
        let config = parse_board_config(
            "[board]\nname = 'bench'\n\n[indicators]\nred = '!gpio5' # wired\ngreen = \"gpio6\"\n",
        )
        .unwrap();
        assert_eq!(config.name.as_str(), "bench");
        assert_eq!(config.indicators.red, PinConfig::inverted(5));
        assert_eq!(config.indicators.green, PinConfig::new(6));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_parse_full_config() {
        let config_str = r#"
# Bench board: common-cathode LED
[board]
name = "bench"

[indicators]
red = "gpio6"     # active-high
green = "gpio7"
blue = "!gpio8"
"#;

        let config = parse_board_config(config_str).unwrap();
        assert_eq!(config.name.as_str(), "bench");
        assert_eq!(config.indicators.red, PinConfig::new(6));
        assert_eq!(config.indicators.green, PinConfig::new(7));
        assert_eq!(config.indicators.blue, PinConfig::inverted(8));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let config = parse_board_config("[indicators]\nblue = \"!gpio9\"\n").unwrap();
        assert_eq!(config.name.as_str(), "tricolor");
        assert_eq!(config.indicators.red, PinConfig::inverted(2));
        assert_eq!(config.indicators.blue, PinConfig::inverted(9));
    }

    #[test]
    fn test_unknown_key_ignored() {
        let config = parse_board_config("[indicators]\nbrightness = 3\n").unwrap();
        assert_eq!(config, BoardConfig::new());
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_board_config("[serial]\nbaud = 115200\n"),
            Err(ParseError::InvalidSection)
        );
        assert_eq!(
            parse_board_config("[indicators]\nred\n"),
            Err(ParseError::InvalidLine)
        );
        assert_eq!(
            parse_board_config("[indicators]\nred = \"gpio\"\n"),
            Err(ParseError::InvalidPin)
        );
        assert_eq!(
            parse_board_config("[board]\nname = \"a-very-long-board-name\"\n"),
            Err(ParseError::LabelTooLong)
        );
    }

    #[test]
    fn test_parsed_config_can_fail_validation() {
        let config = parse_board_config("[indicators]\nred = \"gpio3\"\n").unwrap();
        assert!(config.validate().is_err());
    }
}
