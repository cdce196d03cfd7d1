//! Scan tick task
//!
//! Runs [`ScanCycle::tick`] once per period against the real pins. The
//! timer is a deadline advanced by exactly one period on each re-arm, so
//! handler jitter does not accumulate into drift.

use defmt::*;
use embassy_time::{Duration, Instant, Timer};
use portable_atomic::{AtomicU32, Ordering};

use hexpad_core::config::ScanConfig;
use hexpad_core::display::DisplayBuffer;
use hexpad_core::scan::{Board, ScanCycle, TICK_PERIOD_US};
use hexpad_core::traits::TickTimer;
use hexpad_drivers::buzzer::GpioBuzzer;
use hexpad_drivers::display::{SegmentBus, SelectLines};
use hexpad_drivers::keypad::ColumnLines;
use hexpad_hal_rp2040::{RpInput, RpOutput};

use crate::channels::{DISPLAY_UPDATE, KEY_EVENTS};

/// Ticks run since boot
pub static TICKS: AtomicU32 = AtomicU32::new(0);

/// Ticks whose handler ran past the next deadline
pub static OVERRUNS: AtomicU32 = AtomicU32::new(0);

/// Key events lost because the channel was full
pub static DROPPED_EVENTS: AtomicU32 = AtomicU32::new(0);

/// Board wiring as built from `board.toml`
pub type HexpadBoard = Board<
    DeadlineTimer,
    SelectLines<RpOutput>,
    SegmentBus<RpOutput>,
    ColumnLines<RpInput>,
    GpioBuzzer<RpOutput>,
>;

/// Periodic deadline
pub struct DeadlineTimer {
    next: Instant,
    period: Duration,
}

impl DeadlineTimer {
    /// First deadline one period from now
    pub fn new(period: Duration) -> Self {
        Self {
            next: Instant::now() + period,
            period,
        }
    }

    /// Instant the next tick is due
    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// Restart the schedule from now after an overrun
    fn resync(&mut self) {
        self.next = Instant::now() + self.period;
    }
}

impl TickTimer for DeadlineTimer {
    fn rearm(&mut self) {
        self.next += self.period;
    }
}

/// Tick period as an embassy duration
pub fn tick_period() -> Duration {
    Duration::from_micros(TICK_PERIOD_US as u64)
}

/// Tick task - multiplexes the display and scans the keypad
#[embassy_executor::task]
pub async fn tick_task(mut board: HexpadBoard, config: ScanConfig) {
    info!(
        "Tick task started: {} us period, debounce {} sweeps",
        TICK_PERIOD_US, config.debounce_threshold
    );

    let mut cycle = ScanCycle::new(&config);
    let mut buffer = DisplayBuffer::new();

    loop {
        Timer::at(board.timer.deadline()).await;

        // Between ticks, never mid-render
        if let Some(update) = DISPLAY_UPDATE.try_take() {
            buffer = update;
        }

        let started = Instant::now();
        let event = cycle.tick(&mut board, &buffer);
        TICKS.fetch_add(1, Ordering::Relaxed);

        if let Some(event) = event {
            debug!(
                "Key event {} at tick {}, buzzer {}, {}",
                event,
                cycle.ticks(),
                cycle.is_buzzing(),
                cycle.debounce()
            );
            if KEY_EVENTS.try_send(event).is_err() {
                DROPPED_EVENTS.fetch_add(1, Ordering::Relaxed);
                warn!("Key event channel full, dropped {}", event);
            }
        }

        if Instant::now() >= board.timer.deadline() {
            let overruns = OVERRUNS.fetch_add(1, Ordering::Relaxed) + 1;
            warn!(
                "Tick overrun #{}: handler took {} us",
                overruns,
                started.elapsed().as_micros()
            );
            board.timer.resync();
        }
    }
}
