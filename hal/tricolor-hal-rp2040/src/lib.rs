//! RP2040-specific HAL for the Tricolor firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `tricolor-hal` traits, plus RP2040-specific functionality:
//!
//! - `OutputPin` for embassy GPIO outputs
//! - Dynamic pin allocation for config-driven setup
//! - UART link configuration and receive error mapping

#![no_std]

pub mod gpio;
pub mod pins;
pub mod uart;
