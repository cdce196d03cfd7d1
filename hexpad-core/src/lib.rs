//! Board-agnostic core logic for the hex keypad display
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (select lines, segments, columns, buzzer, timer)
//! - Scan phase sequencing and keypad position mapping
//! - Debounce state machine
//! - Seven-segment encoding and digit multiplexing
//! - Per-tick scan scheduler
//! - Key latch feeding the display buffer
//! - Configuration types and `board.toml` parsing

#![no_std]
#![deny(unsafe_code)]

pub mod buzzer;
pub mod config;
pub mod control;
pub mod display;
pub mod keypad;
pub mod scan;
pub mod traits;

#[cfg(test)]
mod testing;
