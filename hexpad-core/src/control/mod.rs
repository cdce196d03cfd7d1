//! Control loop logic
//!
//! Runs outside the scan tick and owns the display buffer contents.

pub mod latch;

pub use latch::{KeyLatch, LatchAction, LatchPhase};
