//! UART serial link abstractions
//!
//! Describes the framing of an asynchronous serial link and the clock
//! divisor a UART needs to hit a given baud rate.

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl UartConfig {
    /// 8 data bits, no parity, 1 stop bit at the given baud rate
    pub const fn new(baudrate: u32) -> Self {
        Self {
            baudrate,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }

    /// Bits on the wire per character, including start and stop bits
    pub const fn frame_bits(&self) -> u32 {
        let data = match self.data_bits {
            DataBits::Seven => 7,
            DataBits::Eight => 8,
            DataBits::Nine => 9,
        };
        let parity = match self.parity {
            Parity::None => 0,
            Parity::Even | Parity::Odd => 1,
        };
        let stop = match self.stop_bits {
            StopBits::One => 1,
            StopBits::Two => 2,
        };
        1 + data + parity + stop
    }

    /// Time one character occupies on the wire, in microseconds
    ///
    /// Work triggered by a received character must finish within this
    /// window or the next character overwrites it.
    pub const fn byte_period_us(&self) -> u32 {
        if self.baudrate == 0 {
            return 0;
        }
        ((self.frame_bits() as u64 * 1_000_000) / self.baudrate as u64) as u32
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
    Nine,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}

/// Fractional baud rate divisor (PL011 style, 16x oversampling)
///
/// The divisor is `clock / (16 * baud)` as a 16.6 fixed-point number split
/// into an integer part (`ibrd`) and a 6-bit fraction (`fbrd`). Rates the
/// clock cannot reach are clamped, not rejected: callers compare
/// [`BaudDivisor::actual_baud`] against the target if they care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BaudDivisor {
    /// Integer part, 1..=65535
    pub ibrd: u16,
    /// Fractional part in 64ths, 0..=63
    pub fbrd: u8,
    clock_hz: u32,
}

impl BaudDivisor {
    /// Compute the divisor for `baud` from a UART reference clock of `clock_hz`
    pub const fn new(clock_hz: u32, baud: u32) -> Self {
        if baud == 0 {
            return Self { ibrd: u16::MAX, fbrd: 0, clock_hz };
        }

        // 8 * clock / baud keeps one extra bit for rounding the fraction
        let div = (8 * clock_hz as u64) / baud as u64;
        let ibrd = div >> 7;

        // Rounding the fraction up to 64 carries into the integer part
        let fbrd = ((div & 0x7f) + 1) / 2;
        let (ibrd, fbrd) = if fbrd == 64 { (ibrd + 1, 0) } else { (ibrd, fbrd) };

        let (ibrd, fbrd) = if ibrd == 0 {
            (1, 0)
        } else if ibrd >= 65535 {
            (65535, 0)
        } else {
            (ibrd, fbrd)
        };

        Self {
            ibrd: ibrd as u16,
            fbrd: fbrd as u8,
            clock_hz,
        }
    }

    /// Baud rate the divisor actually produces
    pub const fn actual_baud(&self) -> u32 {
        let denom = 64 * self.ibrd as u64 + self.fbrd as u64;
        ((4 * self.clock_hz as u64) / denom) as u32
    }

    /// Deviation from `target` in parts per thousand (positive = too fast)
    pub const fn error_permille(&self, target: u32) -> i32 {
        if target == 0 {
            return 0;
        }
        let actual = self.actual_baud() as i64;
        (((actual - target as i64) * 1000) / target as i64) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_8n1_frame() {
        let cfg = UartConfig::new(9600);
        assert_eq!(cfg.data_bits, DataBits::Eight);
        assert_eq!(cfg.parity, Parity::None);
        assert_eq!(cfg.stop_bits, StopBits::One);
        assert_eq!(cfg.frame_bits(), 10);
    }

    #[test]
    fn test_byte_period() {
        assert_eq!(UartConfig::new(9600).byte_period_us(), 1041);
        assert_eq!(UartConfig::new(115_200).byte_period_us(), 86);
        assert_eq!(UartConfig::new(0).byte_period_us(), 0);

        let cfg = UartConfig {
            parity: Parity::Even,
            stop_bits: StopBits::Two,
            ..UartConfig::new(9600)
        };
        assert_eq!(cfg.frame_bits(), 12);
    }

    #[test]
    fn test_divisor_rp2040_peri_clock() {
        // 125 MHz clk_peri, 9600 baud
        let div = BaudDivisor::new(125_000_000, 9600);
        assert_eq!(div.ibrd, 813);
        assert_eq!(div.fbrd, 51);
        assert_eq!(div.actual_baud(), 9600);
        assert_eq!(div.error_permille(9600), 0);
    }

    #[test]
    fn test_divisor_slow_crystal() {
        // 4 MHz crystal still lands within 1% of 9600
        let div = BaudDivisor::new(4_000_000, 9600);
        assert_eq!(div.ibrd, 26);
        assert!(div.error_permille(9600).abs() < 10);
    }

    #[test]
    fn test_divisor_fraction_carries() {
        // 8 * clock / baud ends in 0x7f: the rounded fraction would be 64
        let div = BaudDivisor::new(125_000_000, 9011);
        assert_eq!((div.ibrd, div.fbrd), (867, 0));
        assert!(div.error_permille(9011).abs() <= 1);
    }

    #[test]
    fn test_fbrd_fits_six_bits() {
        for baud in (1200..=230_400).step_by(7) {
            let div = BaudDivisor::new(125_000_000, baud);
            assert!(div.fbrd < 64, "baud {} gave fbrd {}", baud, div.fbrd);
        }
    }

    #[test]
    fn test_divisor_clamps() {
        // Too fast for the clock: clamp to the smallest divisor
        let div = BaudDivisor::new(1_000_000, 10_000_000);
        assert_eq!((div.ibrd, div.fbrd), (1, 0));
        assert!(div.error_permille(10_000_000) < -900);

        // Too slow: clamp to the largest divisor
        let div = BaudDivisor::new(125_000_000, 10);
        assert_eq!((div.ibrd, div.fbrd), (65535, 0));

        let div = BaudDivisor::new(125_000_000, 0);
        assert_eq!(div.ibrd, u16::MAX);
        assert_eq!(div.error_permille(0), 0);
    }
}
