//! Keypad column inputs
//!
//! Four GPIO inputs with pull-ups. A pressed key connects its column to the
//! asserted (low) row line, so a pressed key reads low.

use hexpad_core::keypad::COLUMN_COUNT;
use hexpad_core::traits::ColumnInputs;
use hexpad_hal::InputPin;

/// Column input driver
pub struct ColumnLines<P> {
    lines: [P; COLUMN_COUNT],
}

impl<P: InputPin> ColumnLines<P> {
    pub fn new(lines: [P; COLUMN_COUNT]) -> Self {
        Self { lines }
    }
}

impl<P: InputPin> ColumnInputs for ColumnLines<P> {
    fn is_low(&self, column: u8) -> bool {
        // Out-of-range columns read as released
        self.lines
            .get(column as usize)
            .is_some_and(|line| line.is_low())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockInput;

    #[test]
    fn test_reads_each_column() {
        let columns = ColumnLines::new([
            MockInput { high: true },
            MockInput { high: false },
            MockInput { high: true },
            MockInput { high: true },
        ]);

        assert!(!columns.is_low(0));
        assert!(columns.is_low(1));
        assert!(!columns.is_low(2));
        assert!(!columns.is_low(4));
    }
}
