//! Digit/row select lines
//!
//! Four GPIO outputs, one per digit. The same lines drive the keypad rows,
//! so at most one of them may be asserted at any time.

use hexpad_core::keypad::DIGIT_COUNT;
use hexpad_core::traits::DigitSelect;
use hexpad_hal::{Level, OutputPin};

/// Select line driver
pub struct SelectLines<P> {
    lines: [P; DIGIT_COUNT],
    /// If true, a line is asserted by driving it low
    active_low: bool,
}

impl<P: OutputPin> SelectLines<P> {
    /// Create the driver with every line released
    ///
    /// # Arguments
    /// - `lines`: select pins, digit 0 first
    /// - `active_low`: lines are asserted low (common-anode digit drivers)
    pub fn new(lines: [P; DIGIT_COUNT], active_low: bool) -> Self {
        let mut select = Self {
            lines,
            active_low,
        };
        select.release_all();
        select
    }
}

impl<P: OutputPin> DigitSelect for SelectLines<P> {
    fn select(&mut self, digit: u8) {
        let idle = Level::for_active(false, self.active_low);

        // Release first so two lines are never asserted together
        for (i, line) in self.lines.iter_mut().enumerate() {
            if i != digit as usize {
                line.set_level(idle);
            }
        }

        // An out-of-range digit leaves every line released
        if let Some(line) = self.lines.get_mut(digit as usize) {
            line.set_level(Level::for_active(true, self.active_low));
        }
    }

    fn release_all(&mut self) {
        let idle = Level::for_active(false, self.active_low);
        for line in self.lines.iter_mut() {
            line.set_level(idle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{levels, MockPin};

    fn pins() -> [MockPin; DIGIT_COUNT] {
        core::array::from_fn(|_| MockPin::new())
    }

    #[test]
    fn test_starts_released() {
        let select = SelectLines::new(pins(), true);
        assert_eq!(levels(&select.lines), [true; 4]);
    }

    #[test]
    fn test_active_low_select() {
        let mut select = SelectLines::new(pins(), true);

        select.select(2);
        assert_eq!(levels(&select.lines), [true, true, false, true]);

        select.select(0);
        assert_eq!(levels(&select.lines), [false, true, true, true]);
    }

    #[test]
    fn test_active_high_select() {
        let mut select = SelectLines::new(pins(), false);
        assert_eq!(levels(&select.lines), [false; 4]);

        select.select(3);
        assert_eq!(levels(&select.lines), [false, false, false, true]);

        select.release_all();
        assert_eq!(levels(&select.lines), [false; 4]);
    }

    #[test]
    fn test_out_of_range_releases_everything() {
        let mut select = SelectLines::new(pins(), true);
        select.select(1);
        select.select(7);
        assert_eq!(levels(&select.lines), [true; 4]);
    }
}
