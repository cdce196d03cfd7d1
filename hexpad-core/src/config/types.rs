//! Configuration type definitions
//!
//! These types represent the board configuration. The firmware embeds a
//! `board.toml` and parses it into these at boot.

use super::hardware::PinMap;
use crate::keypad::DEFAULT_THRESHOLD;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Debounce threshold must be at least 1
    ZeroDebounceThreshold,
    /// Pin number outside the chip's GPIO range
    InvalidPin(u8),
    /// Same GPIO assigned to two lines
    DuplicatePin(u8),
}

/// Scan and output behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanConfig {
    /// Consecutive samples (one per sweep) to confirm a push or release
    pub debounce_threshold: u8,
    /// Pulse the buzzer while a confirmed key is held
    pub buzzer_enabled: bool,
    /// Digit/row select lines are asserted low
    pub select_active_low: bool,
    /// Segment lines light their segment when high
    pub segments_active_high: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            debounce_threshold: DEFAULT_THRESHOLD,
            buzzer_enabled: true,
            select_active_low: true,
            segments_active_high: true,
        }
    }
}

impl ScanConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce_threshold == 0 {
            return Err(ConfigError::ZeroDebounceThreshold);
        }
        Ok(())
    }
}

/// Complete board configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    pub scan: ScanConfig,
    pub pins: PinMap,
}

impl BoardConfig {
    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scan.validate()?;
        self.pins.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        assert!(BoardConfig::default().validate().is_ok());
        assert_eq!(ScanConfig::default().debounce_threshold, 32);
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let config = ScanConfig {
            debounce_threshold: 0,
            ..ScanConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroDebounceThreshold));
    }
}
