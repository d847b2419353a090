//! Command alphabet
//!
//! Maps received bytes onto commands. Decoding is total: anything outside
//! the alphabet decodes to [`Command::AllOff`], indistinguishable from an
//! explicit `'0'`.

/// Red indicator only
pub const CMD_RED: u8 = b'R';
/// Green indicator only
pub const CMD_GREEN: u8 = b'V';
/// Blue indicator only
pub const CMD_BLUE: u8 = b'A';
/// All three indicators
pub const CMD_ALL_ON: u8 = b'T';
/// All indicators off
pub const CMD_ALL_OFF: u8 = b'0';

/// Indicator command carried by one received byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    Red,
    Green,
    Blue,
    AllOn,
    AllOff,
}

impl Command {
    /// Every command in the alphabet
    pub const ALPHABET: [Command; 5] = [
        Command::Red,
        Command::Green,
        Command::Blue,
        Command::AllOn,
        Command::AllOff,
    ];

    /// Strict lookup, `None` for bytes outside the alphabet
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            CMD_RED => Some(Command::Red),
            CMD_GREEN => Some(Command::Green),
            CMD_BLUE => Some(Command::Blue),
            CMD_ALL_ON => Some(Command::AllOn),
            CMD_ALL_OFF => Some(Command::AllOff),
            _ => None,
        }
    }

    /// Total decode used by the receive path
    pub const fn decode(byte: u8) -> Self {
        match Self::from_byte(byte) {
            Some(cmd) => cmd,
            None => Command::AllOff,
        }
    }

    /// Wire byte for this command
    pub const fn as_byte(self) -> u8 {
        match self {
            Command::Red => CMD_RED,
            Command::Green => CMD_GREEN,
            Command::Blue => CMD_BLUE,
            Command::AllOn => CMD_ALL_ON,
            Command::AllOff => CMD_ALL_OFF,
        }
    }
}
