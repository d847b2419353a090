//! Board configuration loading
//!
//! `board.toml` is compiled into the image and parsed once at boot. The
//! build script runs this same parser and validation over the file, so the
//! fallback below is not expected to fire on a firmware that built.

use defmt::*;

use tricolor_core::config::{parse_board_config, BoardConfig};

/// Embedded board configuration (compiled into firmware)
/// Edit board.toml and rebuild to rewire the indicators
const EMBEDDED_CONFIG: &str = include_str!("../board.toml");

/// Parse and validate the embedded configuration, or fall back to defaults
pub fn load_board_config() -> BoardConfig {
    let config = match parse_board_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            error!("board.toml parse error: {:?}, using defaults", e);
            return BoardConfig::default();
        }
    };

    if let Err(e) = config.validate() {
        error!("board.toml rejected: {:?}, using defaults", e);
        return BoardConfig::default();
    }

    info!(
        "Board '{}': red={:?} green={:?} blue={:?}",
        config.name.as_str(),
        config.indicators.red,
        config.indicators.green,
        config.indicators.blue
    );
    config
}
