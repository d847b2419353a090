//! GPIO pin abstractions
//!
//! Provides the digital output trait implemented by chip-specific HALs and
//! the polarity type that maps a logical on/off onto an electrical level.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Toggle the pin state
    fn toggle(&mut self);

    /// Set the pin to a specific electrical level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Electrical level that energizes a load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Pin high = on
    ActiveHigh,
    /// Pin low = on (LED to VCC through a resistor, sinking driver)
    #[default]
    ActiveLow,
}

impl Polarity {
    /// Build from an "inverted" flag as written in pin strings (`!gpio2`)
    pub const fn from_inverted(inverted: bool) -> Self {
        if inverted {
            Polarity::ActiveLow
        } else {
            Polarity::ActiveHigh
        }
    }

    /// Electrical level (true = high) that represents the logical state `on`
    pub const fn level(self, on: bool) -> bool {
        match self {
            Polarity::ActiveHigh => on,
            Polarity::ActiveLow => !on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_high_levels() {
        let p = Polarity::ActiveHigh;
        assert!(p.level(true));
        assert!(!p.level(false));
    }

    #[test]
    fn test_active_low_levels() {
        let p = Polarity::ActiveLow;
        assert!(!p.level(true));
        assert!(p.level(false));
    }

    #[test]
    fn test_from_inverted() {
        assert_eq!(Polarity::from_inverted(true), Polarity::ActiveLow);
        assert_eq!(Polarity::from_inverted(false), Polarity::ActiveHigh);
        assert_eq!(Polarity::default(), Polarity::ActiveLow);
    }
}
