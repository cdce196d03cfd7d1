//! GPIO wrappers implementing the hexpad-hal pin traits
//!
//! A pin configured as inverted (`!gpioN`) has its logical level flipped
//! here, so drivers only ever deal with logical levels.

use embassy_rp::gpio::{Input, Level, Output, Pull};
use hexpad_core::config::PinConfig;
use hexpad_hal::{InputPin, OutputPin};

use crate::pins::{PinBank, PinError};

/// Push-pull output
pub struct RpOutput {
    pin: Output<'static>,
    inverted: bool,
}

impl RpOutput {
    /// Take the configured pin from the bank as an output, logically low
    pub fn new(bank: &mut PinBank, config: PinConfig) -> Result<Self, PinError> {
        let pin = bank.take(config.pin)?;
        let initial = if config.inverted {
            Level::High
        } else {
            Level::Low
        };
        Ok(Self {
            pin: Output::new(pin, initial),
            inverted: config.inverted,
        })
    }
}

impl OutputPin for RpOutput {
    fn set_high(&mut self) {
        if self.inverted {
            self.pin.set_low();
        } else {
            self.pin.set_high();
        }
    }

    fn set_low(&mut self) {
        if self.inverted {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high() != self.inverted
    }

    fn toggle(&mut self) {
        // Inversion does not change what a toggle does on the wire
        self.pin.toggle();
    }
}

/// Digital input
pub struct RpInput {
    pin: Input<'static>,
    inverted: bool,
}

impl RpInput {
    /// Take the configured pin from the bank as an input
    ///
    /// `^gpioN` enables the internal pull-up; otherwise the pin floats and
    /// needs an external resistor.
    pub fn new(bank: &mut PinBank, config: PinConfig) -> Result<Self, PinError> {
        let pin = bank.take(config.pin)?;
        let pull = if config.pull_up { Pull::Up } else { Pull::None };
        Ok(Self {
            pin: Input::new(pin, pull),
            inverted: config.inverted,
        })
    }
}

impl InputPin for RpInput {
    fn is_high(&self) -> bool {
        self.pin.is_high() != self.inverted
    }
}
