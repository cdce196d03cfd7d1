//! Tick scheduler
//!
//! One call to [`ScanCycle::tick`] is one timer period. The order inside a
//! tick is fixed: re-arm the timer, paint the digit, sample and debounce the
//! column, update the buzzer, advance the phase. Painting and sampling use
//! the same phase value, because the select lines that light a digit are
//! also the lines that drive the keypad row being read.
//!
//! Every step is O(1); nothing here loops over more than the four select
//! lines or eight segment bits.

use crate::buzzer::BuzzerDriver;
use crate::config::ScanConfig;
use crate::display::{self, DisplayBuffer};
use crate::keypad::{DebounceState, Debouncer, KeyEvent, ScanPhase};
use crate::traits::{BuzzerOutput, ColumnInputs, DigitSelect, SegmentOutput, TickTimer};

/// Nominal tick period in microseconds
pub const TICK_PERIOD_US: u32 = 1000;

/// Hardware collaborators of the tick handler
///
/// Owned by whoever runs the tick; passed in by exclusive reference.
pub struct Board<T, D, S, C, B> {
    /// Periodic timer source
    pub timer: T,
    /// Shared digit/row select lines
    pub select: D,
    /// Segment bus
    pub segments: S,
    /// Keypad column inputs
    pub columns: C,
    /// Buzzer line
    pub buzzer: B,
}

/// Scan state carried from tick to tick
#[derive(Debug, Clone)]
pub struct ScanCycle {
    phase: ScanPhase,
    debouncer: Debouncer,
    buzzer: BuzzerDriver,
    ticks: u32,
}

impl Default for ScanCycle {
    fn default() -> Self {
        Self::new(&ScanConfig::default())
    }
}

impl ScanCycle {
    /// Create the scan state at phase 0 with no key in flight
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            phase: ScanPhase::START,
            debouncer: Debouncer::new(config.debounce_threshold),
            buzzer: BuzzerDriver::new(config.buzzer_enabled),
            ticks: 0,
        }
    }

    /// Phase the next tick will use
    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    /// Debounce counters and flags
    pub fn debounce(&self) -> DebounceState {
        self.debouncer.snapshot()
    }

    /// Check if the buzzer is currently being driven
    pub fn is_buzzing(&self) -> bool {
        self.buzzer.is_sounding()
    }

    /// Ticks run since creation (wrapping)
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Run one tick
    ///
    /// Returns the push or release confirmed during this tick, if any.
    pub fn tick<T, D, S, C, B>(
        &mut self,
        board: &mut Board<T, D, S, C, B>,
        buffer: &DisplayBuffer,
    ) -> Option<KeyEvent>
    where
        T: TickTimer,
        D: DigitSelect,
        S: SegmentOutput,
        C: ColumnInputs,
        B: BuzzerOutput,
    {
        board.timer.rearm();

        let phase = self.phase;
        display::render(phase, buffer, &mut board.select, &mut board.segments);

        let column_is_low = board.columns.is_low(phase.column());
        let event = self.debouncer.sample(phase.key_code(), column_is_low);

        self.buzzer
            .update(self.debouncer.is_pushed(), &mut board.buzzer);

        self.phase.advance();
        self.ticks = self.ticks.wrapping_add(1);

        event
    }
}
