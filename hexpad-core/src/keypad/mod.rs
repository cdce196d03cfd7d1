//! Keypad scanning
//!
//! Scan phase bookkeeping, key codes and the debounce state machine.

pub mod debounce;
pub mod events;
pub mod keymap;
pub mod phase;

pub use debounce::{DebouncePhase, DebounceState, Debouncer, DEFAULT_THRESHOLD};
pub use events::KeyEvent;
pub use keymap::{KeyCode, KEY_CHARS};
pub use phase::{ScanPhase, COLUMN_COUNT, DIGIT_COUNT, PHASE_COUNT};
