//! Hardware abstraction traits
//!
//! These traits define the interface between the command logic
//! and hardware-specific implementations.

pub mod indicator;

pub use indicator::IndicatorOutput;
