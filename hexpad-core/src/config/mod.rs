//! Configuration types
//!
//! Board configuration parsed from the `board.toml` the firmware embeds.

pub mod hardware;
pub mod toml;
pub mod types;

pub use hardware::*;
pub use toml::{parse_config, ParseError};
pub use types::*;
