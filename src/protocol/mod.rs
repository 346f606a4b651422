//! Session protocol handling.
//!
//! This module implements the line commands accepted by the interactive
//! session and the board notation used to share layouts.

pub mod notation;
pub mod parser;

pub use notation::{encode_notation, parse_notation, NotationError};
pub use parser::{parse_command, Command, OptionName, ALL_OPTIONS};
