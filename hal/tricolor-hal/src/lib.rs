//! Tricolor Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits and link types that
//! chip-specific HALs implement. The command logic only ever talks to these,
//! so it can be exercised on the host with mock pins.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (tricolor-firmware)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tricolor-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ tricolor-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Contents
//!
//! - [`gpio::OutputPin`], [`gpio::Polarity`] - Digital outputs and their active level
//! - [`uart::UartConfig`], [`uart::BaudDivisor`] - Serial link framing and timing

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod uart;

pub use gpio::{OutputPin, Polarity};
pub use uart::{BaudDivisor, DataBits, Parity, StopBits, UartConfig};
