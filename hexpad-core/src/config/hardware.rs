//! Hardware configuration types
//!
//! Pin assignments for the select, column, segment and buzzer lines.

use super::types::ConfigError;

/// Number of GPIO pins on the RP2040
pub const GPIO_COUNT: u8 = 30;

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create a pin with pull-up enabled
    pub const fn with_pullup(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: true,
        }
    }
}

/// Parse a pin string from config
///
/// Supports formats:
/// - "gpio11" -> pin 11
/// - "!gpio12" -> pin 12, inverted (active-low)
/// - "^gpio4" -> pin 4, pull-up
/// - "!^gpio4" -> both
pub fn parse_pin_string(s: &str) -> Option<PinConfig> {
    let mut s = s.trim();
    let mut config = PinConfig::default();

    if let Some(rest) = s.strip_prefix('!') {
        config.inverted = true;
        s = rest;
    }
    if let Some(rest) = s.strip_prefix('^') {
        config.pull_up = true;
        s = rest;
    }

    let num_str = s.strip_prefix("gpio")?;
    let pin: u8 = num_str.parse().ok()?;
    if pin >= GPIO_COUNT {
        return None;
    }

    config.pin = pin;
    Some(config)
}

/// GPIO assignment for every line the scanner drives or reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMap {
    /// Digit/row select lines, digit 0 first
    pub select: [PinConfig; 4],
    /// Keypad column inputs, column 0 first
    pub columns: [PinConfig; 4],
    /// Segment lines, segment `a` (pattern bit 7) first, decimal point last
    pub segments: [PinConfig; 8],
    /// Buzzer output
    pub buzzer: PinConfig,
}

impl Default for PinMap {
    fn default() -> Self {
        Self {
            select: [
                PinConfig::new(2),
                PinConfig::new(3),
                PinConfig::new(4),
                PinConfig::new(5),
            ],
            columns: [
                PinConfig::with_pullup(6),
                PinConfig::with_pullup(7),
                PinConfig::with_pullup(8),
                PinConfig::with_pullup(9),
            ],
            segments: [
                PinConfig::new(10),
                PinConfig::new(11),
                PinConfig::new(12),
                PinConfig::new(13),
                PinConfig::new(14),
                PinConfig::new(15),
                PinConfig::new(16),
                PinConfig::new(17),
            ],
            buzzer: PinConfig::new(18),
        }
    }
}

impl PinMap {
    /// Every assigned pin, in wiring order
    pub fn iter(&self) -> impl Iterator<Item = &PinConfig> {
        self.select
            .iter()
            .chain(self.columns.iter())
            .chain(self.segments.iter())
            .chain(core::iter::once(&self.buzzer))
    }

    /// Check pin ranges and that no GPIO is used twice
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut used: u32 = 0;
        for pin in self.iter() {
            if pin.pin >= GPIO_COUNT {
                return Err(ConfigError::InvalidPin(pin.pin));
            }
            let mask = 1u32 << pin.pin;
            if used & mask != 0 {
                return Err(ConfigError::DuplicatePin(pin.pin));
            }
            used |= mask;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pin_string() {
        assert_eq!(parse_pin_string("gpio11"), Some(PinConfig::new(11)));
        assert_eq!(parse_pin_string("^gpio4"), Some(PinConfig::with_pullup(4)));
        assert_eq!(parse_pin_string(" gpio29 "), Some(PinConfig::new(29)));

        let both = parse_pin_string("!^gpio7").unwrap();
        assert!(both.inverted && both.pull_up);
        assert_eq!(both.pin, 7);

        // Invalid
        assert_eq!(parse_pin_string("gpio30"), None);
        assert_eq!(parse_pin_string("pin11"), None);
        assert_eq!(parse_pin_string(""), None);
        assert_eq!(parse_pin_string("^!gpio3"), None);
    }

    #[test]
    fn test_default_map_valid() {
        assert!(PinMap::default().validate().is_ok());
        assert_eq!(PinMap::default().iter().count(), 17);
    }

    #[test]
    fn test_duplicate_pin_rejected() {
        let mut map = PinMap::default();
        map.buzzer = PinConfig::new(3);
        assert_eq!(map.validate(), Err(ConfigError::DuplicatePin(3)));
    }

    #[test]
    fn test_out_of_range_pin_rejected() {
        let mut map = PinMap::default();
        map.segments[7] = PinConfig::new(31);
        assert_eq!(map.validate(), Err(ConfigError::InvalidPin(31)));
    }
}
