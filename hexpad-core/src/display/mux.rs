//! Display multiplexer
//!
//! Lights one digit per tick. Every digit is active for 4 of the 16 phases,
//! so at a 1 ms tick the whole display refreshes at 62.5 Hz.

use super::buffer::{DisplayBuffer, BLANK_CHAR};
use super::segment::{encode_char, BLANK};
use crate::keypad::ScanPhase;
use crate::traits::{DigitSelect, SegmentOutput};

/// Paint the digit selected by `phase`
///
/// Segments are blanked before the select lines move so the previous
/// digit's pattern never flashes on the newly selected one.
pub fn render<D, S>(phase: ScanPhase, buffer: &DisplayBuffer, select: &mut D, segments: &mut S)
where
    D: DigitSelect,
    S: SegmentOutput,
{
    let digit = phase.digit();

    segments.write(BLANK);
    select.select(digit);

    let ch = buffer.get(digit as usize).unwrap_or(BLANK_CHAR);
    segments.write(encode_char(ch));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::segment::HEX_PATTERNS;
    use crate::keypad::PHASE_COUNT;

    #[derive(Default)]
    struct Recorder {
        selected: Option<u8>,
        writes: heapless::Vec<u8, 8>,
    }

    impl DigitSelect for Recorder {
        fn select(&mut self, digit: u8) {
            self.selected = Some(digit);
        }

        fn release_all(&mut self) {
            self.selected = None;
        }
    }

    impl SegmentOutput for Recorder {
        fn write(&mut self, pattern: u8) {
            let _ = self.writes.push(pattern);
        }
    }

    #[test]
    fn test_blank_then_pattern() {
        let mut select = Recorder::default();
        let mut segments = Recorder::default();
        let buf = DisplayBuffer::new();

        render(ScanPhase::START, &buf, &mut select, &mut segments);

        assert_eq!(select.selected, Some(0));
        assert_eq!(segments.writes.as_slice(), &[BLANK, HEX_PATTERNS[0]]);
    }

    #[test]
    fn test_each_digit_rendered_four_times_per_sweep() {
        let mut buf = DisplayBuffer::new();
        buf.set(0, b'1').unwrap();
        buf.set(1, b'2').unwrap();
        buf.set(2, b'3').unwrap();
        buf.set(3, b'4').unwrap();

        let mut counts = [0u8; 4];
        let mut phase = ScanPhase::START;
        for _ in 0..PHASE_COUNT {
            let mut select = Recorder::default();
            let mut segments = Recorder::default();
            render(phase, &buf, &mut select, &mut segments);

            let digit = select.selected.unwrap();
            counts[digit as usize] += 1;
            assert_eq!(segments.writes[1], HEX_PATTERNS[digit as usize + 1]);
            phase.advance();
        }

        assert_eq!(counts, [4, 4, 4, 4]);
    }

    #[test]
    fn test_blank_slot_renders_dark() {
        let mut select = Recorder::default();
        let mut segments = Recorder::default();
        let buf = DisplayBuffer::new();

        render(ScanPhase::new(4).unwrap(), &buf, &mut select, &mut segments);
        assert_eq!(select.selected, Some(1));
        assert_eq!(segments.writes.as_slice(), &[BLANK, BLANK]);
    }
}
