//! GPIO indicator output
//!
//! Drives an LED (or any on/off load) from a GPIO pin. This is the only
//! place a logical "on" becomes an electrical level.

use tricolor_core::traits::IndicatorOutput;
use tricolor_hal::{OutputPin, Polarity};

/// GPIO indicator output
pub struct GpioIndicator<P> {
    pin: P,
    polarity: Polarity,
    /// Current logical state (true = lit)
    on: bool,
}

impl<P: OutputPin> GpioIndicator<P> {
    /// Create a new indicator, forced off
    pub fn new(pin: P, polarity: Polarity) -> Self {
        let mut indicator = Self {
            pin,
            polarity,
            on: false,
        };
        indicator.set_on(false);
        indicator
    }

    /// Create an indicator lit by driving the pin high
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, Polarity::ActiveHigh)
    }

    /// Create an indicator lit by driving the pin low
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, Polarity::ActiveLow)
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }
}

impl<P: OutputPin> IndicatorOutput for GpioIndicator<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;
        self.pin.set_state(self.polarity.level(on));
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
