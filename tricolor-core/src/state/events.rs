//! Events delivered from the receiver to the command handler

use tricolor_protocol::Command;

/// One byte taken off the serial link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReceiveEvent {
    /// Raw received byte, any value
    pub byte: u8,
}

impl ReceiveEvent {
    pub const fn new(byte: u8) -> Self {
        Self { byte }
    }

    /// Command this byte selects; unknown bytes select [`Command::AllOff`]
    pub const fn command(&self) -> Command {
        Command::decode(self.byte)
    }

    /// Check if the byte is part of the command alphabet
    pub const fn is_recognized(&self) -> bool {
        Command::from_byte(self.byte).is_some()
    }
}
