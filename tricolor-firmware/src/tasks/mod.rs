//! Embassy async tasks
//!
//! Each task runs independently and communicates via the command mailbox.

pub mod command;
pub mod serial_rx;

pub use command::{command_task, BoardHandler};
pub use serial_rx::serial_rx_task;
