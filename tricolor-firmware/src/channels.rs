//! Inter-task communication
//!
//! The receive task posts every byte into a one-slot mailbox that the
//! command task drains. A byte posted before the previous one was taken
//! replaces it.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use tricolor_core::CommandMailbox;

/// Latest received command byte (serial RX -> command handler)
pub static COMMAND_MAILBOX: CommandMailbox<CriticalSectionRawMutex> = CommandMailbox::new();
