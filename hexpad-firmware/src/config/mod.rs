//! Configuration loading
//!
//! The board configuration is embedded at build time and parsed with the
//! core's no_std parser. A config that fails to parse falls back to the
//! reference wiring so the board still comes up.

use defmt::*;

use hexpad_core::config::{parse_config, BoardConfig};

/// Embedded board configuration (compiled into firmware)
/// Edit board.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../../board.toml");

/// Parse the embedded configuration, or fall back to defaults
pub fn load_board_config() -> BoardConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            log_config_summary(&config);
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {}", e);
            error!("Using default board configuration");
            BoardConfig::default()
        }
    }
}

/// Log a summary of the loaded configuration
fn log_config_summary(config: &BoardConfig) {
    debug!("  debounce threshold: {}", config.scan.debounce_threshold);
    debug!("  buzzer enabled: {}", config.scan.buzzer_enabled);
    debug!(
        "  select active low: {}, segments active high: {}",
        config.scan.select_active_low, config.scan.segments_active_high
    );
    debug!("  buzzer pin: gpio{}", config.pins.buzzer.pin);
}
