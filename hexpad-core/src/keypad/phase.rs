//! Scan phase counter
//!
//! The phase is the single source of truth for both multiplexing and
//! scanning: `phase / 4` picks the digit (and keypad row), `phase % 4` picks
//! the column sampled this tick.

use super::keymap::KeyCode;

/// Number of phases in one sweep
pub const PHASE_COUNT: u8 = 16;

/// Number of display digits / keypad rows
pub const DIGIT_COUNT: usize = 4;

/// Number of keypad columns
pub const COLUMN_COUNT: usize = 4;

/// Position in the 16-tick scan sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanPhase(u8);

impl ScanPhase {
    /// First phase of a sweep
    pub const START: Self = Self(0);

    /// Create a phase, rejecting values outside 0..16
    pub const fn new(value: u8) -> Option<Self> {
        if value < PHASE_COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Raw phase value (0-15)
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Active digit and keypad row (0-3)
    pub const fn digit(self) -> u8 {
        self.0 / 4
    }

    /// Column sampled this tick (0-3)
    pub const fn column(self) -> u8 {
        self.0 % 4
    }

    /// Keypad position sampled this tick
    pub const fn key_code(self) -> KeyCode {
        KeyCode::from_phase(self)
    }

    /// Advance to the next phase, wrapping after 15
    pub fn advance(&mut self) {
        self.0 = (self.0 + 1) % PHASE_COUNT;
    }
}
