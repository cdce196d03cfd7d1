//! RP2040-specific HAL for the Hexpad firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `hexpad-hal` traits, plus RP2040-specific functionality:
//!
//! - Dynamic pin allocation for config-driven setup
//! - GPIO output/input wrappers honoring per-pin inversion and pull-ups

#![no_std]

pub mod gpio;
pub mod pins;

pub use gpio::{RpInput, RpOutput};
pub use pins::{PinBank, PinError};

// Re-export shared traits from hexpad-hal for convenience
pub use hexpad_hal::{InputPin, OutputPin};
