//! Multiplexed 7-segment display
//!
//! - Segment encoding table
//! - Four-slot character buffer
//! - Per-tick multiplexer

pub mod buffer;
pub mod mux;
pub mod segment;

pub use buffer::{DisplayBuffer, DisplayError, BLANK_CHAR};
pub use mux::render;
pub use segment::{encode_char, encode_nibble, BLANK};
