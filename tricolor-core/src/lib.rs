//! Board-agnostic core logic for the Tricolor firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Indicator state and the command transition
//! - Indicator output trait
//! - Command handler (clear, then assert)
//! - One-slot receive mailbox
//! - Board configuration types and parser

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod handler;
pub mod mailbox;
pub mod state;
pub mod traits;

pub use handler::CommandHandler;
pub use mailbox::CommandMailbox;
pub use state::{IndicatorState, Line, ReceiveEvent};
