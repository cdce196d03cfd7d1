//! Host-side mock board used by the unit tests

use core::cell::Cell;

use crate::keypad::KeyCode;
use crate::scan::Board;
use crate::traits::{BuzzerOutput, ColumnInputs, DigitSelect, SegmentOutput, TickTimer};

/// Keypad matrix wired to the shared select lines
///
/// A column reads low only while the row of a pressed key is selected,
/// mirroring the real circuit.
pub struct MockMatrix {
    selected: Cell<Option<u8>>,
    pressed: Cell<u16>,
    reads: Cell<[u8; 16]>,
    last_read: Cell<Option<(u8, u8)>>,
}

impl MockMatrix {
    pub fn new() -> Self {
        Self {
            selected: Cell::new(None),
            pressed: Cell::new(0),
            reads: Cell::new([0; 16]),
            last_read: Cell::new(None),
        }
    }

    pub fn press(&self, key: KeyCode) {
        self.pressed.set(self.pressed.get() | (1 << key.value()));
    }

    pub fn release(&self, key: KeyCode) {
        self.pressed.set(self.pressed.get() & !(1 << key.value()));
    }

    /// Reads per keypad position
    pub fn reads(&self) -> [u8; 16] {
        self.reads.get()
    }

    /// (row, column) of the most recent read
    pub fn last_read(&self) -> Option<(u8, u8)> {
        self.last_read.get()
    }
}

impl DigitSelect for &MockMatrix {
    fn select(&mut self, digit: u8) {
        self.selected.set(Some(digit));
    }

    fn release_all(&mut self) {
        self.selected.set(None);
    }
}

impl ColumnInputs for &MockMatrix {
    fn is_low(&self, column: u8) -> bool {
        let Some(row) = self.selected.get() else {
            return false;
        };
        let position = row * 4 + column;

        let mut reads = self.reads.get();
        reads[position as usize] += 1;
        self.reads.set(reads);
        self.last_read.set(Some((row, column)));

        self.pressed.get() & (1 << position) != 0
    }
}

#[derive(Default)]
pub struct MockTimer {
    pub rearms: u32,
}

impl TickTimer for MockTimer {
    fn rearm(&mut self) {
        self.rearms += 1;
    }
}

#[derive(Default)]
pub struct MockSegments {
    pub last: u8,
}

impl SegmentOutput for MockSegments {
    fn write(&mut self, pattern: u8) {
        self.last = pattern;
    }
}

#[derive(Default)]
pub struct MockBuzzer {
    pub high: bool,
    pub toggles: u32,
}

impl BuzzerOutput for MockBuzzer {
    fn toggle(&mut self) {
        self.high = !self.high;
        self.toggles += 1;
    }

    fn set_low(&mut self) {
        self.high = false;
    }
}

pub type MockBoard<'a> = Board<MockTimer, &'a MockMatrix, MockSegments, &'a MockMatrix, MockBuzzer>;

pub fn mock_board(matrix: &MockMatrix) -> MockBoard<'_> {
    Board {
        timer: MockTimer::default(),
        select: matrix,
        segments: MockSegments::default(),
        columns: matrix,
        buzzer: MockBuzzer::default(),
    }
}
