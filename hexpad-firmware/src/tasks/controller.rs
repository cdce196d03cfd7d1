//! Controller task
//!
//! Consumes key events from the tick task, feeds them through the key latch
//! and publishes the updated display buffer.

use defmt::*;

use hexpad_core::control::{KeyLatch, LatchAction};
use hexpad_core::display::DisplayBuffer;

use crate::channels::{DISPLAY_UPDATE, KEY_EVENTS};

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task() {
    info!("Controller task started");

    let mut latch = KeyLatch::new();
    let mut buffer = DisplayBuffer::new();

    loop {
        let event = KEY_EVENTS.receive().await;

        match latch.on_event(event, &mut buffer) {
            LatchAction::Updated(key) => {
                info!("Key {} pushed", key.to_char() as char);
                DISPLAY_UPDATE.signal(buffer);
            }
            LatchAction::Rearmed(key) => {
                debug!("Key {} released", key.to_char() as char);
            }
            LatchAction::Resynced { lost, key } => {
                warn!(
                    "Release of {} never arrived, key {} pushed",
                    lost.to_char() as char,
                    key.to_char() as char
                );
                DISPLAY_UPDATE.signal(buffer);
            }
            LatchAction::Ignored(event) => {
                warn!(
                    "Out-of-order key event for {} in {} (push confirmed: {})",
                    event.key().to_char() as char,
                    latch.phase(),
                    latch.push_confirmed()
                );
            }
        }
    }
}
