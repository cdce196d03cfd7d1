//! Simple TOML parser for board configuration
//!
//! This is a minimal line-based parser that handles only the subset needed
//! for `board.toml`. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean)
//! - Basic `"..."` and literal `'...'` strings without escapes
//! - Integers with sign, `_` separators and `0x`/`0o`/`0b` prefixes
//! - Flat arrays of pin strings, on one line or spread over several
//! - [section] headers
//! - Comments (# ...), including after a value
//!
//! Unknown sections and keys are errors so a typo cannot silently fall back
//! to a default.

use heapless::Vec;

use super::hardware::{parse_pin_string, PinConfig};
use super::types::{BoardConfig, ConfigError};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not valid in its section
    UnknownKey,
    /// Line is neither a header nor `key = value`
    InvalidLine,
    /// Value has the wrong type or is out of range
    InvalidValue,
    /// Pin string not in `gpioN` form
    InvalidPin,
    /// Pin array has the wrong number of entries
    WrongPinCount,
    /// Parsed config failed validation
    Invalid(ConfigError),
}

impl From<ConfigError> for ParseError {
    fn from(e: ConfigError) -> Self {
        ParseError::Invalid(e)
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Scan,
    Buzzer,
    Display,
    Pins,
}

/// Most lines any pin array can hold (the segment bus)
const MAX_PIN_ARRAY: usize = 8;

type PinList = Vec<PinConfig, MAX_PIN_ARRAY>;

/// Parse TOML configuration into a validated BoardConfig
pub fn parse_config(input: &str) -> Result<BoardConfig, ParseError> {
    let mut config = BoardConfig::default();
    let mut section = Section::Root;
    // Array still waiting for its closing `]`
    let mut open_array: Option<(&str, PinList)> = None;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        // Skip empty lines and comments
        if line.is_empty() {
            continue;
        }

        if let Some((key, pins)) = open_array.as_mut() {
            if feed_pin_items(line, pins)? {
                store_pin_array(*key, pins, &mut config)?;
                open_array = None;
            }
            continue;
        }

        // Check for section header
        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            section = parse_section_header(header)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine)?;
        match value.strip_prefix('[') {
            Some(items) if section == Section::Pins => {
                let mut pins = PinList::new();
                if feed_pin_items(items, &mut pins)? {
                    store_pin_array(key, &pins, &mut config)?;
                } else {
                    open_array = Some((key, pins));
                }
            }
            _ => apply_value(section, key, value, &mut config)?,
        }
    }

    if open_array.is_some() {
        return Err(ParseError::InvalidValue);
    }

    config.validate()?;
    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "scan" => Ok(Section::Scan),
        "buzzer" => Ok(Section::Buzzer),
        "display" => Ok(Section::Display),
        "pins" => Ok(Section::Pins),
        _ => Err(ParseError::InvalidSection),
    }
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut BoardConfig,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Scan, "debounce_threshold") => {
            let threshold = parse_int(value)?;
            config.scan.debounce_threshold =
                u8::try_from(threshold).map_err(|_| ParseError::InvalidValue)?;
        }
        (Section::Buzzer, "enabled") => {
            config.scan.buzzer_enabled = parse_bool(value)?;
        }
        (Section::Display, "select_active_low") => {
            config.scan.select_active_low = parse_bool(value)?;
        }
        (Section::Display, "segments_active_high") => {
            config.scan.segments_active_high = parse_bool(value)?;
        }
        // Arrays are routed to store_pin_array; anything else is the wrong type
        (Section::Pins, "select" | "columns" | "segments") => {
            return Err(ParseError::InvalidValue);
        }
        (Section::Pins, "buzzer") => {
            config.pins.buzzer = parse_pin_string(parse_string(value)?).ok_or(ParseError::InvalidPin)?;
        }
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

/// Assign a finished `[pins]` array to its key
fn store_pin_array(key: &str, pins: &[PinConfig], config: &mut BoardConfig) -> Result<(), ParseError> {
    match key {
        "select" => config.pins.select = exact(pins)?,
        "columns" => config.pins.columns = exact(pins)?,
        "segments" => config.pins.segments = exact(pins)?,
        "buzzer" => return Err(ParseError::InvalidValue),
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

fn exact<const N: usize>(pins: &[PinConfig]) -> Result<[PinConfig; N], ParseError> {
    pins.try_into().map_err(|_| ParseError::WrongPinCount)
}

/// Push the pin strings in `text` (the part of an array after `[`, or a
/// continuation line). Returns true once the closing `]` has been seen.
fn feed_pin_items(text: &str, pins: &mut PinList) -> Result<bool, ParseError> {
    let (items, closed) = match text.strip_suffix(']') {
        Some(items) => (items, true),
        None => (text, false),
    };

    for item in items.split(',') {
        let item = item.trim();
        // Allow a trailing comma
        if item.is_empty() {
            continue;
        }
        let pin = parse_pin_string(parse_string(item)?).ok_or(ParseError::InvalidPin)?;
        pins.push(pin).map_err(|_| ParseError::WrongPinCount)?;
    }
    Ok(closed)
}

/// Drop a trailing `# comment` that is not inside a string
fn strip_comment(line: &str) -> &str {
    let mut quote = None;
    for (i, c) in line.char_indices() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), c) if c == q => quote = None,
            (None, '#') => return &line[..i],
            _ => {}
        }
    }
    line
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

/// `"basic"` or `'literal'`
fn parse_string(value: &str) -> Result<&str, ParseError> {
    ['"', '\'']
        .into_iter()
        .find_map(|q| value.strip_prefix(q)?.strip_suffix(q))
        .ok_or(ParseError::InvalidValue)
}

/// TOML integer: `-32`, `+32`, `3_2`, `0x20`, `0o40`, `0b100000`
fn parse_int(value: &str) -> Result<i64, ParseError> {
    let (negative, unsigned) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x") => (16, &unsigned[2..]),
        Some("0o") => (8, &unsigned[2..]),
        Some("0b") => (2, &unsigned[2..]),
        _ => (10, unsigned),
    };

    // Prefixed forms take no sign; decimals take no leading zero
    if radix != 10 && unsigned.len() != value.len() {
        return Err(ParseError::InvalidValue);
    }
    if radix == 10 && digits.len() > 1 && digits.starts_with('0') {
        return Err(ParseError::InvalidValue);
    }
    // `_` only between two digits
    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return Err(ParseError::InvalidValue);
    }

    let mut n: i64 = 0;
    for c in digits.chars().filter(|&c| c != '_') {
        let digit = c.to_digit(radix).ok_or(ParseError::InvalidValue)?;
        n = n
            .checked_mul(i64::from(radix))
            .and_then(|n| n.checked_add(i64::from(digit)))
            .ok_or(ParseError::InvalidValue)?;
    }
    Ok(if negative { -n } else { n })
}

fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanConfig;

    const FULL: &str = r#"
# Reference wiring
[scan]
debounce_threshold = 16   # sweeps

[buzzer]
enabled = false

[display]
select_active_low = true
segments_active_high = false

[pins]
select = ["gpio20", "gpio21", "gpio22", "gpio26"]
columns = ["^gpio0", "^gpio1", "^gpio2", "^gpio3",]
segments = ["gpio4", "gpio5", "gpio6", "gpio7", "gpio8", "gpio9", "gpio10", "gpio11"]
buzzer = "gpio15"
"#;

    #[test]
    fn test_parse_full() {
        let config = parse_config(FULL).unwrap();
        assert_eq!(config.scan.debounce_threshold, 16);
        assert!(!config.scan.buzzer_enabled);
        assert!(!config.scan.segments_active_high);
        assert_eq!(config.pins.select[3], PinConfig::new(26));
        assert_eq!(config.pins.columns[0], PinConfig::with_pullup(0));
        assert_eq!(config.pins.segments[7], PinConfig::new(11));
        assert_eq!(config.pins.buzzer, PinConfig::new(15));
    }

    #[test]
    fn test_empty_is_default() {
        assert_eq!(parse_config("").unwrap(), BoardConfig::default());
        assert_eq!(parse_config("# nothing\n\n").unwrap().scan, ScanConfig::default());
    }

    #[test]
    fn test_unknown_section_and_key() {
        assert_eq!(parse_config("[motor]"), Err(ParseError::InvalidSection));
        assert_eq!(
            parse_config("[scan]\ntick_us = 500"),
            Err(ParseError::UnknownKey)
        );
        assert_eq!(parse_config("enabled = true"), Err(ParseError::UnknownKey));
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            parse_config("[scan]\ndebounce_threshold = 300"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[buzzer]\nenabled = yes"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(parse_config("[scan]\njunk"), Err(ParseError::InvalidLine));
    }

    #[test]
    fn test_validation_runs() {
        assert_eq!(
            parse_config("[scan]\ndebounce_threshold = 0"),
            Err(ParseError::Invalid(ConfigError::ZeroDebounceThreshold))
        );
        assert_eq!(
            parse_config("[pins]\nbuzzer = \"gpio2\""),
            Err(ParseError::Invalid(ConfigError::DuplicatePin(2)))
        );
    }

    #[test]
    fn test_pin_array_errors() {
        assert_eq!(
            parse_config("[pins]\nselect = [\"gpio2\", \"gpio3\"]"),
            Err(ParseError::WrongPinCount)
        );
        assert_eq!(
            parse_config("[pins]\nselect = [\"gpio2\", \"gpio3\", \"pin4\", \"gpio5\"]"),
            Err(ParseError::InvalidPin)
        );
        assert_eq!(
            parse_config("[pins]\nselect = \"gpio2\""),
            Err(ParseError::InvalidValue)
        );
    }

    #[test]
    fn test_hash_inside_string_kept() {
        assert_eq!(strip_comment(r#"a = "x#y" # tail"#), r#"a = "x#y" "#);
        assert_eq!(strip_comment("a = 'x#\"y' # tail"), "a = 'x#\"y' ");
    }

    #[test]
    fn test_multiline_pin_array() {
        let config = parse_config(
            r#"
[pins]
segments = [
    "gpio10", "gpio11", "gpio12", "gpio13",   # a-d
    "gpio14", "gpio15",

    "gpio16", "gpio17",
]
buzzer = "gpio18"
"#,
        )
        .unwrap();
        assert_eq!(config.pins.segments[0], PinConfig::new(10));
        assert_eq!(config.pins.segments[7], PinConfig::new(17));
        assert_eq!(config.pins.buzzer, PinConfig::new(18));

        let config = parse_config("[pins]\ncolumns = [\n\"^gpio6\", \"^gpio7\",\n\"^gpio8\", \"^gpio9\"]").unwrap();
        assert_eq!(config.pins.columns[3], PinConfig::with_pullup(9));
    }

    #[test]
    fn test_multiline_pin_array_errors() {
        // Never closed
        assert_eq!(
            parse_config("[pins]\nselect = [\n\"gpio2\",\n"),
            Err(ParseError::InvalidValue)
        );
        // A header cannot appear inside an array
        assert_eq!(
            parse_config("[pins]\nselect = [\n\"gpio2\",\n[scan]\n]"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[pins]\nselect = [\n\"gpio2\", \"gpio3\",\n]"),
            Err(ParseError::WrongPinCount)
        );
        assert_eq!(
            parse_config("[pins]\nbuzzer = [\"gpio18\"]"),
            Err(ParseError::InvalidValue)
        );
    }

    #[test]
    fn test_literal_strings() {
        let config = parse_config("[pins]\nbuzzer = 'gpio19'").unwrap();
        assert_eq!(config.pins.buzzer, PinConfig::new(19));

        let config =
            parse_config("[pins]\nselect = ['!gpio20', \"gpio21\", 'gpio22', 'gpio26']").unwrap();
        assert_eq!(config.pins.select[0], PinConfig { pin: 20, inverted: true, pull_up: false });

        // Quotes must match
        assert_eq!(
            parse_config("[pins]\nbuzzer = 'gpio19\""),
            Err(ParseError::InvalidValue)
        );
    }

    #[test]
    fn test_integer_forms() {
        let threshold = |v: &str| {
            let mut doc: heapless::String<64> = heapless::String::new();
            doc.push_str("[scan]\ndebounce_threshold = ").unwrap();
            doc.push_str(v).unwrap();
            parse_config(&doc).map(|c| c.scan.debounce_threshold)
        };

        assert_eq!(threshold("0x20"), Ok(32));
        assert_eq!(threshold("3_2"), Ok(32));
        assert_eq!(threshold("+32"), Ok(32));
        assert_eq!(threshold("0o40"), Ok(32));
        assert_eq!(threshold("0b10_0000"), Ok(32));
        assert_eq!(threshold("0xfF"), Ok(255));

        for bad in ["032", "_32", "32_", "3__2", "0x", "-0x20", "0x1_g", "-5", "0X20", "3.2"] {
            assert_eq!(threshold(bad), Err(ParseError::InvalidValue), "{}", bad);
        }
    }

    #[test]
    fn test_parse_int_bounds() {
        assert_eq!(parse_int("-32"), Ok(-32));
        assert_eq!(parse_int("0"), Ok(0));
        assert_eq!(parse_int("9_223_372_036_854_775_807"), Ok(i64::MAX));
        assert_eq!(parse_int("9223372036854775808"), Err(ParseError::InvalidValue));
    }
}
