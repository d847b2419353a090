//! UART link setup for RP2040
//!
//! Translates the board-neutral [`UartConfig`] into embassy-rp's UART
//! configuration and folds receive errors into a small local enum.

use embassy_rp::uart::{self, Config};
use tricolor_hal::{DataBits, Parity, StopBits, UartConfig};

/// Link settings the RP2040 UART cannot produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// PL011 frames carry at most 8 data bits
    UnsupportedDataBits,
}

/// Error from UART receive operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RxError {
    /// Framing error
    Framing,
    /// Parity error
    Parity,
    /// Break condition
    Break,
    /// Overrun error
    Overrun,
    /// Other error
    Other,
}

impl From<uart::Error> for RxError {
    fn from(e: uart::Error) -> Self {
        match e {
            uart::Error::Framing => RxError::Framing,
            uart::Error::Parity => RxError::Parity,
            uart::Error::Break => RxError::Break,
            uart::Error::Overrun => RxError::Overrun,
            _ => RxError::Other,
        }
    }
}

/// Build the embassy-rp UART configuration for `link`
pub fn rp_config(link: &UartConfig) -> Result<Config, LinkError> {
    let mut cfg = Config::default();
    cfg.baudrate = link.baudrate;
    cfg.data_bits = match link.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
        DataBits::Nine => return Err(LinkError::UnsupportedDataBits),
    };
    cfg.parity = match link.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    cfg.stop_bits = match link.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    Ok(cfg)
}
