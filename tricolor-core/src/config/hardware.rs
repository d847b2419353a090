//! Board hardware configuration types
//!
//! Describes where the three indicators are wired and how they are driven.
//! Serial link parameters are protocol constants and live in
//! [`link_config`] rather than in the board file.

use heapless::String;
use tricolor_hal::{Polarity, UartConfig};
use tricolor_protocol::LINK_BAUD;

use crate::state::Line;

/// Maximum length of the board name
pub const MAX_LABEL_LEN: usize = 16;

/// Number of GPIOs a pin string may name (gpio0..gpio29)
pub const GPIO_COUNT: u8 = 30;

/// GPIOs owned by the command UART (TX, RX)
pub const RESERVED_PINS: [u8; 2] = [0, 1];

/// Serial link settings: 9600 baud, 8N1
pub const fn link_config() -> UartConfig {
    UartConfig::new(LINK_BAUD)
}

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
}

impl PinConfig {
    /// Create an active-high pin
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
        }
    }

    /// Electrical polarity of this pin
    pub const fn polarity(&self) -> Polarity {
        Polarity::from_inverted(self.inverted)
    }
}

/// Indicator wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorHwConfig {
    pub red: PinConfig,
    pub green: PinConfig,
    pub blue: PinConfig,
}

impl Default for IndicatorHwConfig {
    /// Common-anode LED on GPIO2-4, lines sink current (active-low)
    fn default() -> Self {
        Self {
            red: PinConfig::inverted(2),
            green: PinConfig::inverted(3),
            blue: PinConfig::inverted(4),
        }
    }
}

impl IndicatorHwConfig {
    /// Pin driving `line`
    pub const fn pin(&self, line: Line) -> PinConfig {
        match line {
            Line::Red => self.red,
            Line::Green => self.green,
            Line::Blue => self.blue,
        }
    }

    /// Mutable access to the pin driving `line`
    pub fn pin_mut(&mut self, line: Line) -> &mut PinConfig {
        match line {
            Line::Red => &mut self.red,
            Line::Green => &mut self.green,
            Line::Blue => &mut self.blue,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Pin number outside gpio0..gpio29
    InvalidPin(Line),
    /// Pin collides with the command UART
    ReservedPin(Line),
    /// Two lines share a pin
    DuplicatePin(Line, Line),
}

/// Complete board configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    /// Board name, shown in the boot log
    pub name: String<MAX_LABEL_LEN>,
    /// Indicator wiring
    pub indicators: IndicatorHwConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        let mut name = String::new();
        let _ = name.push_str("tricolor");
        Self {
            name,
            indicators: IndicatorHwConfig::default(),
        }
    }
}

impl BoardConfig {
    /// Create the default board configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that every indicator pin is usable and distinct
    pub fn validate(&self) -> Result<(), ConfigError> {
        for line in Line::ALL {
            let pin = self.indicators.pin(line).pin;
            if pin >= GPIO_COUNT {
                return Err(ConfigError::InvalidPin(line));
            }
            if RESERVED_PINS.contains(&pin) {
                return Err(ConfigError::ReservedPin(line));
            }
        }

        for (i, a) in Line::ALL.iter().enumerate() {
            for b in &Line::ALL[i + 1..] {
                if self.indicators.pin(*a).pin == self.indicators.pin(*b).pin {
                    return Err(ConfigError::DuplicatePin(*a, *b));
                }
            }
        }

        Ok(())
    }
}
