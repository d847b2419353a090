//! Dynamic pin allocation for config-driven hardware setup
//!
//! Indicator pins come from `board.toml` as numbers, so the GPIOs are moved
//! into a bank that hands them out by number at runtime. GPIO0/GPIO1 carry
//! UART0 and are split off beforehand as typed pins.

use embassy_rp::gpio::AnyPin;
use embassy_rp::peripherals::{PIN_0, PIN_1, UART0};
use embassy_rp::{Peri, Peripherals};

use tricolor_core::config::{GPIO_COUNT, RESERVED_PINS};

/// Bank slots, one per GPIO
const BANK_SIZE: usize = GPIO_COUNT as usize;

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin already taken
    AlreadyTaken,
    /// Pin reserved for the command UART
    Reserved,
}

/// Peripherals for the command UART, split off before the pin bank
pub struct UartPeripherals {
    pub uart0: Peri<'static, UART0>,
    pub tx: Peri<'static, PIN_0>,
    pub rx: Peri<'static, PIN_1>,
}

/// Pin bank that holds the free GPIOs and allows taking them by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; BANK_SIZE],
}

impl PinBank {
    /// Split the peripherals into the UART set and a bank of remaining GPIOs
    pub fn from_peripherals(p: Peripherals) -> (Self, UartPeripherals) {
        let uart = UartPeripherals {
            uart0: p.UART0,
            tx: p.PIN_0,
            rx: p.PIN_1,
        };

        let bank = Self {
            pins: [
                None,
                None,
                Some(p.PIN_2.into()),
                Some(p.PIN_3.into()),
                Some(p.PIN_4.into()),
                Some(p.PIN_5.into()),
                Some(p.PIN_6.into()),
                Some(p.PIN_7.into()),
                Some(p.PIN_8.into()),
                Some(p.PIN_9.into()),
                Some(p.PIN_10.into()),
                Some(p.PIN_11.into()),
                Some(p.PIN_12.into()),
                Some(p.PIN_13.into()),
                Some(p.PIN_14.into()),
                Some(p.PIN_15.into()),
                Some(p.PIN_16.into()),
                Some(p.PIN_17.into()),
                Some(p.PIN_18.into()),
                Some(p.PIN_19.into()),
                Some(p.PIN_20.into()),
                Some(p.PIN_21.into()),
                Some(p.PIN_22.into()),
                Some(p.PIN_23.into()),
                Some(p.PIN_24.into()),
                Some(p.PIN_25.into()),
                Some(p.PIN_26.into()),
                Some(p.PIN_27.into()),
                Some(p.PIN_28.into()),
                Some(p.PIN_29.into()),
            ],
        };

        (bank, uart)
    }

    /// Take a pin by number
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        if pin_num >= GPIO_COUNT {
            return Err(PinError::InvalidPin);
        }
        if RESERVED_PINS.contains(&pin_num) {
            return Err(PinError::Reserved);
        }
        self.pins[pin_num as usize]
            .take()
            .ok_or(PinError::AlreadyTaken)
    }
}
