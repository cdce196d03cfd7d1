//! Hardware abstraction traits
//!
//! These traits define the interface between the scan logic and the
//! board-specific drivers. Each one covers a single group of lines so the
//! tick handler can borrow them independently.

pub mod buzzer;
pub mod display;
pub mod keypad;
pub mod timer;

pub use buzzer::BuzzerOutput;
pub use display::{DigitSelect, SegmentOutput};
pub use keypad::ColumnInputs;
pub use timer::TickTimer;
