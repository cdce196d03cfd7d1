//! Display buffer
//!
//! Holds one ASCII character per digit. Slot 0 follows the keypad, the other
//! slots stay blank.

use crate::keypad::{KeyCode, DIGIT_COUNT};

/// Sentinel for an unlit digit
pub const BLANK_CHAR: u8 = b' ';

/// Errors that can occur when writing the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Slot index outside 0-3
    SlotOutOfRange,
}

/// Characters shown on the four digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayBuffer {
    slots: [u8; DIGIT_COUNT],
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayBuffer {
    /// Power-on contents: `'0'` in the keypad slot, the rest blank
    pub const fn new() -> Self {
        Self {
            slots: [b'0', BLANK_CHAR, BLANK_CHAR, BLANK_CHAR],
        }
    }

    /// Character in a slot, `None` if out of range
    pub fn get(&self, slot: usize) -> Option<u8> {
        self.slots.get(slot).copied()
    }

    /// Write a character into a slot
    pub fn set(&mut self, slot: usize, ch: u8) -> Result<(), DisplayError> {
        let cell = self
            .slots
            .get_mut(slot)
            .ok_or(DisplayError::SlotOutOfRange)?;
        *cell = ch;
        Ok(())
    }

    /// Show a key's character in slot 0
    pub fn show_key(&mut self, key: KeyCode) {
        self.slots[0] = key.to_char();
    }

    /// Character in the keypad slot
    pub fn key_slot(&self) -> u8 {
        self.slots[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_on_contents() {
        let buf = DisplayBuffer::new();
        assert_eq!(buf.key_slot(), b'0');
        assert!((1..DIGIT_COUNT).all(|slot| buf.get(slot) == Some(BLANK_CHAR)));
    }

    #[test]
    fn test_show_key() {
        let mut buf = DisplayBuffer::new();
        buf.show_key(KeyCode::new(10).unwrap());
        assert_eq!(buf.key_slot(), b'A');
        assert_eq!(buf.get(1), Some(BLANK_CHAR));
    }

    #[test]
    fn test_set_out_of_range() {
        let mut buf = DisplayBuffer::new();
        assert_eq!(buf.set(4, b'1'), Err(DisplayError::SlotOutOfRange));
        assert!(buf.set(3, b'1').is_ok());
        assert_eq!(buf.get(3), Some(b'1'));
        assert_eq!(buf.get(4), None);
    }
}
