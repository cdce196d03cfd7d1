//! Debounce state machine
//!
//! Converts raw column samples into confirmed push/release events. One
//! sample arrives per tick, for whichever position the scan phase selects;
//! while a key is in flight only samples of that key's own position count,
//! so the debounce window is measured in sweeps, not ticks.
//!
//! Only one key can be in flight. While a candidate is being detected or a
//! confirmed key is held, every other position is ignored: the first key
//! down masks the rest until it is released.

use super::events::KeyEvent;
use super::keymap::KeyCode;

/// Consecutive samples required to confirm a push or a release
pub const DEFAULT_THRESHOLD: u8 = 32;

/// Debounce phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebouncePhase {
    /// No key in flight
    Idle,
    /// Candidate seen low; `remaining` more low samples confirm it
    Detecting { key: KeyCode, remaining: u8 },
    /// Push confirmed; `release_remaining` high samples confirm the release
    Pushed { key: KeyCode, release_remaining: u8 },
}

/// Snapshot of the debounce counters and flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceState {
    /// Low samples still needed to confirm the candidate (threshold when idle)
    pub push_detected_count: u8,
    /// High samples still needed to confirm the release (threshold unless releasing)
    pub push_release_count: u8,
    /// A push is confirmed and not yet released
    pub push_confirmed: bool,
    /// Candidate or held key, or the last confirmed key when idle
    pub last_detected_key: Option<KeyCode>,
}

/// Single-key debouncer
#[derive(Debug, Clone)]
pub struct Debouncer {
    threshold: u8,
    phase: DebouncePhase,
    last_confirmed: Option<KeyCode>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl Debouncer {
    /// Create a debouncer
    ///
    /// A threshold of 0 is treated as 1 (confirm on the first sample).
    pub fn new(threshold: u8) -> Self {
        Self {
            threshold: threshold.max(1),
            phase: DebouncePhase::Idle,
            last_confirmed: None,
        }
    }

    /// Current phase
    pub fn phase(&self) -> DebouncePhase {
        self.phase
    }

    /// Check if a confirmed push is being held
    pub fn is_pushed(&self) -> bool {
        matches!(self.phase, DebouncePhase::Pushed { .. })
    }

    /// Counter and flag snapshot
    pub fn snapshot(&self) -> DebounceState {
        match self.phase {
            DebouncePhase::Idle => DebounceState {
                push_detected_count: self.threshold,
                push_release_count: self.threshold,
                push_confirmed: false,
                last_detected_key: self.last_confirmed,
            },
            DebouncePhase::Detecting { key, remaining } => DebounceState {
                push_detected_count: remaining,
                push_release_count: self.threshold,
                push_confirmed: false,
                last_detected_key: Some(key),
            },
            DebouncePhase::Pushed {
                key,
                release_remaining,
            } => DebounceState {
                push_detected_count: self.threshold,
                push_release_count: release_remaining,
                push_confirmed: true,
                last_detected_key: Some(key),
            },
        }
    }

    /// Feed the sample taken this tick
    ///
    /// - `position`: keypad position the current phase selects
    /// - `column_is_low`: the column line read low (key pressed)
    pub fn sample(&mut self, position: KeyCode, column_is_low: bool) -> Option<KeyEvent> {
        match self.phase {
            DebouncePhase::Idle => {
                if !column_is_low {
                    return None;
                }
                // First observation counts as the first of `threshold` samples
                self.count_push(position, self.threshold)
            }

            DebouncePhase::Detecting { key, remaining } if key == position => {
                if column_is_low {
                    self.count_push(key, remaining)
                } else {
                    // Bounce: forget the candidate
                    self.phase = DebouncePhase::Idle;
                    None
                }
            }

            DebouncePhase::Pushed {
                key,
                release_remaining,
            } if key == position => {
                if column_is_low {
                    self.phase = DebouncePhase::Pushed {
                        key,
                        release_remaining: self.threshold,
                    };
                    return None;
                }

                let release_remaining = release_remaining - 1;
                if release_remaining == 0 {
                    self.phase = DebouncePhase::Idle;
                    Some(KeyEvent::Released(key))
                } else {
                    self.phase = DebouncePhase::Pushed {
                        key,
                        release_remaining,
                    };
                    None
                }
            }

            // Another key is in flight; this position is masked
            _ => None,
        }
    }

    fn count_push(&mut self, key: KeyCode, remaining: u8) -> Option<KeyEvent> {
        let remaining = remaining - 1;
        if remaining == 0 {
            self.phase = DebouncePhase::Pushed {
                key,
                release_remaining: self.threshold,
            };
            self.last_confirmed = Some(key);
            Some(KeyEvent::Pushed(key))
        } else {
            self.phase = DebouncePhase::Detecting { key, remaining };
            None
        }
    }
}
