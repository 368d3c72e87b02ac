//! Core module - pure scoring logic with no external dependencies
//!
//! This module contains the frame rules, the scoring state machine and
//! the score sheet projection. It has zero dependencies on UI or I/O.

pub mod engine;
pub mod frame;
pub mod sheet;

// Re-export commonly used types
pub use engine::{Ruleset, ScoringEngine};
pub use frame::Frame;
pub use sheet::{FrameCell, ScoringSheet};
