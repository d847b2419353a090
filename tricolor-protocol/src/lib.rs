//! Tricolor Serial Command Protocol
//!
//! A host (typically a Bluetooth serial bridge) sends single ASCII bytes over
//! an asynchronous serial link. Each byte selects an indicator pattern:
//!
//! ```text
//! ┌──────┬──────────────────────────┐
//! │ BYTE │ EFFECT                   │
//! ├──────┼──────────────────────────┤
//! │ 'R'  │ red only                 │
//! │ 'V'  │ green only               │
//! │ 'A'  │ blue only                │
//! │ 'T'  │ all three                │
//! │ '0'  │ all off                  │
//! │ else │ all off                  │
//! └──────┴──────────────────────────┘
//! ```
//!
//! There is no framing beyond byte boundaries and nothing is sent back.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod command;

pub use command::{Command, CMD_ALL_OFF, CMD_ALL_ON, CMD_BLUE, CMD_GREEN, CMD_RED};

/// Link speed in bits per second (8N1)
pub const LINK_BAUD: u32 = 9600;
