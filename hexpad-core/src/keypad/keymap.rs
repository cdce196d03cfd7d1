//! Key codes and the key-to-character table

use super::phase::ScanPhase;

/// Character shown for each scan position
pub const KEY_CHARS: [u8; 16] = *b"0123456789ABCDEF";

/// Identifier of a physical key (0-15)
///
/// The code is the scan phase at which the key is sampled, so row
/// `code / 4` and column `code % 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyCode(u8);

impl KeyCode {
    /// Create a key code, rejecting values above 15
    pub const fn new(value: u8) -> Option<Self> {
        if value < 16 {
            Some(Self(value))
        } else {
            None
        }
    }

    pub(crate) const fn from_phase(phase: ScanPhase) -> Self {
        Self(phase.value())
    }

    /// Raw code (0-15)
    pub const fn value(self) -> u8 {
        self.0
    }

    /// ASCII character printed on the key
    pub const fn to_char(self) -> u8 {
        KEY_CHARS[self.0 as usize]
    }
}

impl TryFrom<u8> for KeyCode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(value)
    }
}
