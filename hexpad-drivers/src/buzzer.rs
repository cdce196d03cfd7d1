//! GPIO buzzer output
//!
//! Piezo or small speaker on one pin. The tick handler toggles it to make a
//! square wave at half the tick rate.

use hexpad_core::traits::BuzzerOutput;
use hexpad_hal::OutputPin;

/// GPIO buzzer
pub struct GpioBuzzer<P> {
    pin: P,
}

impl<P: OutputPin> GpioBuzzer<P> {
    /// Create a new buzzer, driven low (silent)
    pub fn new(mut pin: P) -> Self {
        pin.set_low();
        Self { pin }
    }
}

impl<P: OutputPin> BuzzerOutput for GpioBuzzer<P> {
    fn toggle(&mut self) {
        self.pin.toggle();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockPin;

    #[test]
    fn test_starts_low() {
        let mut pin = MockPin::new();
        pin.high = true;
        let buzzer = GpioBuzzer::new(pin);
        assert!(!buzzer.pin.high);
    }

    #[test]
    fn test_toggle_and_silence() {
        let mut buzzer = GpioBuzzer::new(MockPin::new());

        buzzer.toggle();
        assert!(buzzer.pin.high);
        buzzer.toggle();
        assert!(!buzzer.pin.high);
        buzzer.toggle();

        buzzer.set_low();
        assert!(!buzzer.pin.high);
    }
}
