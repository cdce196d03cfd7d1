//! Events emitted by the debouncer

use super::keymap::KeyCode;

/// Confirmed key transition
///
/// Each event carries the key it refers to, so a consumer never has to read
/// the code from shared state after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyEvent {
    /// Push held for the full debounce window
    Pushed(KeyCode),
    /// Release held for the full debounce window
    Released(KeyCode),
}

impl KeyEvent {
    /// Key this event refers to
    pub fn key(&self) -> KeyCode {
        match self {
            KeyEvent::Pushed(key) | KeyEvent::Released(key) => *key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_carries_key() {
        let key = KeyCode::new(12).unwrap();
        assert_eq!(KeyEvent::Pushed(key).key(), key);
        assert_eq!(KeyEvent::Released(key).key(), key);
    }
}
