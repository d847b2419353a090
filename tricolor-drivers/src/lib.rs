//! Hardware driver implementations
//!
//! Concrete implementations of the traits defined in `tricolor-core`:
//!
//! - GPIO indicator with configurable polarity

#![no_std]
#![deny(unsafe_code)]

pub mod indicator;
