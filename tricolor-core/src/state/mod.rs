//! Indicator state and receive events
//!
//! The output state is a pure function of the last received command.
//! Nothing here touches hardware.

pub mod events;
pub mod indicators;

pub use events::ReceiveEvent;
pub use indicators::{IndicatorState, Line, LINE_COUNT};
