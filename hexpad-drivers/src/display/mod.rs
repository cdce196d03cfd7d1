//! Display drivers
//!
//! - Digit/row select lines shared with the keypad
//! - Segment bus

pub mod segments;
pub mod select;

pub use segments::SegmentBus;
pub use select::SelectLines;
