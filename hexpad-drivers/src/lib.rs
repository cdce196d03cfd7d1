//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in hexpad-core, written against the pin traits of hexpad-hal:
//!
//! - Display drivers (shared select lines, 8-bit segment bus)
//! - Keypad column inputs
//! - Buzzer output
//! - Pin array assembly for the multi-line drivers

#![no_std]
#![deny(unsafe_code)]

pub mod buzzer;
pub mod display;
pub mod keypad;
pub mod lines;

#[cfg(test)]
pub(crate) mod mock;
