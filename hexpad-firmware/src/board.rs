//! Board assembly
//!
//! Builds the drivers from the configured pin map.

use embassy_time::Duration;

use hexpad_core::config::{BoardConfig, PinConfig};
use hexpad_core::scan::Board;
use hexpad_drivers::buzzer::GpioBuzzer;
use hexpad_drivers::display::{SegmentBus, SelectLines};
use hexpad_drivers::keypad::ColumnLines;
use hexpad_drivers::lines::take_lines;
use hexpad_hal_rp2040::{PinBank, PinError, RpInput, RpOutput};

use crate::tasks::{DeadlineTimer, HexpadBoard};

/// Take every configured pin from the bank and wrap it in its driver
pub fn build_board(
    bank: &mut PinBank,
    config: &BoardConfig,
    period: Duration,
) -> Result<HexpadBoard, PinError> {
    let select = SelectLines::new(
        outputs(bank, &config.pins.select)?,
        config.scan.select_active_low,
    );
    let segments = SegmentBus::new(
        outputs(bank, &config.pins.segments)?,
        config.scan.segments_active_high,
    );
    let columns = ColumnLines::new(inputs(bank, &config.pins.columns)?);
    let buzzer = GpioBuzzer::new(RpOutput::new(bank, config.pins.buzzer)?);

    Ok(Board {
        timer: DeadlineTimer::new(period),
        select,
        segments,
        columns,
        buzzer,
    })
}

fn outputs<const N: usize>(
    bank: &mut PinBank,
    pins: &[PinConfig; N],
) -> Result<[RpOutput; N], PinError> {
    take_lines(pins, |pin| RpOutput::new(bank, *pin))
}

fn inputs<const N: usize>(
    bank: &mut PinBank,
    pins: &[PinConfig; N],
) -> Result<[RpInput; N], PinError> {
    take_lines(pins, |pin| RpInput::new(bank, *pin))
}
