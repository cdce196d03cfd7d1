//! Keypad column inputs

/// The four keypad column lines
pub trait ColumnInputs {
    /// Check if the given column (0-3) reads low
    ///
    /// Columns are active-low: a pressed key on the selected row pulls its
    /// column to ground.
    fn is_low(&self, column: u8) -> bool;
}
