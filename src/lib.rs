//! Ten-pin bowling scorekeeper.
//!
//! The `core` module is the scoring state machine (frames, engine,
//! sheet projection); `player` and `game` are the roster glue around
//! it; `term` renders score sheets to a terminal.

pub mod core;
pub mod error;
pub mod game;
pub mod player;
pub mod term;
pub mod types;

pub use error::GameError;
