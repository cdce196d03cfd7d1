//! Display-side outputs: digit select lines and the segment bus

/// Row/digit select lines
///
/// The four lines are shared between the display digits and the keypad
/// rows: asserting line `n` lights digit `n` and drives keypad row `n`.
pub trait DigitSelect {
    /// Assert exactly one line (0-3) and release the other three
    fn select(&mut self, digit: u8);

    /// Release all lines
    fn release_all(&mut self);
}

/// 8-bit segment output
///
/// Bit 7 is segment `a`, bit 1 is segment `g`, bit 0 is the decimal point.
/// A set bit means the segment is lit; polarity is the driver's concern.
pub trait SegmentOutput {
    /// Write a segment pattern
    fn write(&mut self, pattern: u8);
}
