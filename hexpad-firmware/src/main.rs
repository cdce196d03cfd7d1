//! Hexpad - Keypad Display Firmware
//!
//! Main firmware binary for RP2040 boards wired to a 4x4 hex keypad and a
//! 4-digit multiplexed 7-segment display. A fixed-period tick paints one
//! digit, samples one keypad position, debounces it and pulses the buzzer
//! while a key is held; the controller shows the last key on digit 0.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Timer;
use portable_atomic::Ordering;
use {defmt_rtt as _, panic_probe as _};

use hexpad_hal_rp2040::PinBank;

use crate::config::load_board_config;
use crate::tasks::tick::{tick_period, DROPPED_EVENTS, OVERRUNS, TICKS};

mod board;
mod channels;
mod config;
mod tasks;

/// Seconds between heartbeat log lines
const HEARTBEAT_SECS: u64 = 10;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Hexpad firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_board_config();

    let mut bank = PinBank::new(p);
    let board = match board::build_board(&mut bank, &config, tick_period()) {
        Ok(board) => board,
        Err(e) => {
            // validate() rejects duplicate and out-of-range pins, so this
            // means the pin map and the bank disagree
            defmt::panic!("Failed to claim pins: {}", e);
        }
    };
    info!("Display and keypad pins initialized");

    spawner.spawn(unwrap!(tasks::controller_task()));
    spawner.spawn(unwrap!(tasks::tick_task(board, config.scan)));

    info!("All tasks spawned, firmware running");

    // Main task only reports health; all work happens in spawned tasks
    loop {
        Timer::after_secs(HEARTBEAT_SECS).await;
        info!(
            "Heartbeat: {} ticks, {} overruns, {} dropped events",
            TICKS.load(Ordering::Relaxed),
            OVERRUNS.load(Ordering::Relaxed),
            DROPPED_EVENTS.load(Ordering::Relaxed)
        );
    }
}
