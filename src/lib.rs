//! Starting-board generator for the standard 19-tile base game.
//!
//! Exposes the fixed board topology, the fairness-constrained generator,
//! the board notation codec, the terminal renderer, and the session and
//! batch drivers used by the binaries and integration tests.

pub mod batch;
pub mod board;
pub mod generate;
pub mod logging;
pub mod protocol;
pub mod render;
pub mod session;
