//! GPIO outputs
//!
//! Wraps embassy-rp outputs so they implement the shared
//! [`tricolor_hal::OutputPin`] trait.

use embassy_rp::gpio::{AnyPin, Level, Output};
use embassy_rp::Peri;
use tricolor_hal::{OutputPin, Polarity};

/// Push-pull GPIO output
pub struct RpOutput<'d> {
    output: Output<'d>,
}

impl<'d> RpOutput<'d> {
    /// Configure `pin` as an output already driving its inactive level
    ///
    /// The pin never glitches to the active level during setup, so a
    /// load attached to it stays off from the moment the pin is driven.
    pub fn new_off(pin: Peri<'d, AnyPin>, polarity: Polarity) -> Self {
        let level = if polarity.level(false) {
            Level::High
        } else {
            Level::Low
        };
        Self {
            output: Output::new(pin, level),
        }
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.output.set_high();
    }

    fn set_low(&mut self) {
        self.output.set_low();
    }

    fn toggle(&mut self) {
        self.output.toggle();
    }

    fn is_set_high(&self) -> bool {
        self.output.is_set_high()
    }
}
