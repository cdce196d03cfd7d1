//! Key latch
//!
//! Consumer side of the key events. Waits for a confirmed push, shows the
//! key in the display's keypad slot, then waits for the matching release
//! before accepting the next push.
//!
//! The debouncer never confirms a push while another key is held, so a push
//! arriving in `AwaitingRelease` means the release was lost on the way. The
//! latch takes the new push and reports the resync.

use crate::display::DisplayBuffer;
use crate::keypad::{KeyCode, KeyEvent};

/// What the latch is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LatchPhase {
    AwaitingPush,
    AwaitingRelease(KeyCode),
}

/// Result of feeding an event to the latch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LatchAction {
    /// Display buffer now shows this key
    Updated(KeyCode),
    /// Release consumed; ready for the next push
    Rearmed(KeyCode),
    /// Push arrived before the held key's release; display now shows `key`
    Resynced { lost: KeyCode, key: KeyCode },
    /// Event did not fit the current phase
    Ignored(KeyEvent),
}

/// Push/release handshake between the scan tick and the display buffer
#[derive(Debug, Clone)]
pub struct KeyLatch {
    phase: LatchPhase,
    push_confirmed: bool,
}

impl Default for KeyLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyLatch {
    pub const fn new() -> Self {
        Self {
            phase: LatchPhase::AwaitingPush,
            push_confirmed: false,
        }
    }

    pub fn phase(&self) -> LatchPhase {
        self.phase
    }

    /// A push has been consumed and its release not yet seen
    pub fn push_confirmed(&self) -> bool {
        self.push_confirmed
    }

    /// Feed one event from the scan tick
    pub fn on_event(&mut self, event: KeyEvent, buffer: &mut DisplayBuffer) -> LatchAction {
        match (self.phase, event) {
            (LatchPhase::AwaitingPush, KeyEvent::Pushed(key)) => {
                self.latch(key, buffer);
                LatchAction::Updated(key)
            }
            (LatchPhase::AwaitingRelease(lost), KeyEvent::Pushed(key)) => {
                self.latch(key, buffer);
                LatchAction::Resynced { lost, key }
            }
            (LatchPhase::AwaitingRelease(held), KeyEvent::Released(key)) if held == key => {
                // The key code was consumed on the push, so the flag can drop now
                self.push_confirmed = false;
                self.phase = LatchPhase::AwaitingPush;
                LatchAction::Rearmed(key)
            }
            _ => LatchAction::Ignored(event),
        }
    }

    fn latch(&mut self, key: KeyCode, buffer: &mut DisplayBuffer) {
        buffer.show_key(key);
        self.push_confirmed = true;
        self.phase = LatchPhase::AwaitingRelease(key);
    }
}
