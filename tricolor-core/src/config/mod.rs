//! Configuration types
//!
//! Board configuration, its text format, and link constants.

pub mod hardware;
pub mod parse;

pub use hardware::*;
pub use parse::{parse_board_config, ParseError};
