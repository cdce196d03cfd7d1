//! Segment bus
//!
//! Eight GPIO outputs carrying one segment pattern. Line 0 carries bit 7
//! (segment `a`), line 7 carries bit 0 (decimal point).

use hexpad_core::traits::SegmentOutput;
use hexpad_hal::{Level, OutputPin};

/// Number of segment lines, including the decimal point
pub const SEGMENT_LINES: usize = 8;

/// Parallel segment driver
pub struct SegmentBus<P> {
    lines: [P; SEGMENT_LINES],
    /// If true, a lit segment is driven high
    active_high: bool,
}

impl<P: OutputPin> SegmentBus<P> {
    /// Create the driver with every segment dark
    pub fn new(lines: [P; SEGMENT_LINES], active_high: bool) -> Self {
        let mut bus = Self { lines, active_high };
        bus.write(0);
        bus
    }
}

impl<P: OutputPin> SegmentOutput for SegmentBus<P> {
    fn write(&mut self, pattern: u8) {
        for (i, line) in self.lines.iter_mut().enumerate() {
            let lit = pattern & (0x80 >> i) != 0;
            line.set_level(Level::for_active(lit, !self.active_high));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{levels, MockPin};
    use hexpad_core::display::encode_char;

    fn pins() -> [MockPin; SEGMENT_LINES] {
        core::array::from_fn(|_| MockPin::new())
    }

    #[test]
    fn test_starts_dark() {
        let bus = SegmentBus::new(pins(), true);
        assert_eq!(levels(&bus.lines), [false; 8]);

        let bus = SegmentBus::new(pins(), false);
        assert_eq!(levels(&bus.lines), [true; 8]);
    }

    #[test]
    fn test_bit_order() {
        let mut bus = SegmentBus::new(pins(), true);

        // '1' lights segments b and c
        bus.write(encode_char(b'1'));
        assert_eq!(
            levels(&bus.lines),
            [false, true, true, false, false, false, false, false]
        );

        bus.write(0x01);
        assert!(bus.lines[7].high);
        assert!(!bus.lines[0].high);
    }

    #[test]
    fn test_active_low_segments() {
        let mut bus = SegmentBus::new(pins(), false);
        bus.write(encode_char(b'8'));
        // Everything but the decimal point is lit, so driven low
        assert_eq!(
            levels(&bus.lines),
            [false, false, false, false, false, false, false, true]
        );
    }
}
