//! Periodic scan tick
//!
//! Ties the multiplexer, the debouncer and the buzzer to the 16-phase
//! counter.

pub mod cycle;

pub use cycle::{Board, ScanCycle, TICK_PERIOD_US};
