//! Buzzer output

/// Buzzer line driven as a square wave by the tick handler
pub trait BuzzerOutput {
    /// Invert the line
    fn toggle(&mut self);

    /// Drive the line low (speaker idle)
    fn set_low(&mut self);
}
