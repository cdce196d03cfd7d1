//! Buzzer driver
//!
//! Toggles the buzzer line once per tick while a confirmed push is held,
//! giving a square wave at half the tick rate. There is no debounce here;
//! the driver follows the debounced state directly.

use crate::traits::BuzzerOutput;

/// Buzzer state tracked across ticks
#[derive(Debug, Clone)]
pub struct BuzzerDriver {
    enabled: bool,
    sounding: bool,
}

impl Default for BuzzerDriver {
    fn default() -> Self {
        Self::new(true)
    }
}

impl BuzzerDriver {
    /// Create a buzzer driver; a disabled driver never touches the line
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            sounding: false,
        }
    }

    /// Check if the buzzer toggled on the last update
    pub fn is_sounding(&self) -> bool {
        self.sounding
    }

    /// Per-tick update
    ///
    /// - `pushed`: a confirmed push is currently held
    pub fn update<B: BuzzerOutput>(&mut self, pushed: bool, out: &mut B) {
        if !self.enabled {
            return;
        }

        if pushed {
            out.toggle();
            self.sounding = true;
        } else if self.sounding {
            // Leave the speaker idle rather than biased high
            out.set_low();
            self.sounding = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockBuzzer;

    #[test]
    fn test_toggles_every_tick_while_pushed() {
        let mut driver = BuzzerDriver::default();
        let mut out = MockBuzzer::default();

        for tick in 1..=10 {
            driver.update(true, &mut out);
            assert_eq!(out.toggles, tick);
            assert_eq!(out.high, tick % 2 == 1);
        }
    }

    #[test]
    fn test_silent_when_idle() {
        let mut driver = BuzzerDriver::default();
        let mut out = MockBuzzer::default();

        for _ in 0..10 {
            driver.update(false, &mut out);
        }
        assert_eq!(out.toggles, 0);
        assert!(!driver.is_sounding());
    }

    #[test]
    fn test_release_leaves_line_low() {
        let mut driver = BuzzerDriver::default();
        let mut out = MockBuzzer::default();

        driver.update(true, &mut out);
        assert!(out.high);
        driver.update(false, &mut out);
        assert!(!out.high);
        assert!(!driver.is_sounding());
    }

    #[test]
    fn test_disabled_never_toggles() {
        let mut driver = BuzzerDriver::new(false);
        let mut out = MockBuzzer::default();

        for _ in 0..10 {
            driver.update(true, &mut out);
        }
        assert_eq!(out.toggles, 0);
    }
}
