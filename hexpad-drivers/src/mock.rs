//! Mock GPIO pins for testing

use hexpad_hal::{InputPin, OutputPin};

/// Output pin that records its level
#[derive(Debug, Default)]
pub struct MockPin {
    pub high: bool,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.high = true;
    }

    fn set_low(&mut self) {
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Input pin with a fixed level
#[derive(Debug, Clone, Copy)]
pub struct MockInput {
    pub high: bool,
}

impl InputPin for MockInput {
    fn is_high(&self) -> bool {
        self.high
    }
}

/// Levels of a pin array as bools, index 0 first
pub fn levels<const N: usize>(pins: &[MockPin; N]) -> [bool; N] {
    core::array::from_fn(|i| pins[i].high)
}
