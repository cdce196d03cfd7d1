//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use hexpad_core::display::DisplayBuffer;
use hexpad_core::keypad::KeyEvent;

/// Channel capacity for key events
///
/// The debouncer emits at most one event per threshold window, so a few
/// slots cover any controller stall short of a full window.
const KEY_EVENT_CHANNEL_SIZE: usize = 4;

/// Confirmed pushes and releases, in order, from the tick task
pub static KEY_EVENTS: Channel<CriticalSectionRawMutex, KeyEvent, KEY_EVENT_CHANNEL_SIZE> =
    Channel::new();

/// New display contents from the controller
///
/// The tick task takes it between ticks so a digit is never painted from a
/// half-updated buffer.
pub static DISPLAY_UPDATE: Signal<CriticalSectionRawMutex, DisplayBuffer> = Signal::new();
