//! Flat error enumeration for every fallible game operation.
//!
//! One closed enum shared by the core and the roster glue; validation
//! failures are synchronous and never leave partial state behind.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::types::GameKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A roll with a negative pin count.
    RollIsNegative(i32),
    /// A single roll larger than the standing pin count.
    RollExceedsMaxPins(i32),
    /// Two rolls of one frame downing more pins than were standing.
    FrameExceedsMaxPins(u32),
    /// The frame already holds its maximum number of rolls.
    NoMoreRollsAvailable,
    /// The game is closed; no frame accepts further rolls.
    NoMoreFramesAvailable,
    PlayerNotFound(String),
    PlayerAlreadyExists(String),
    PlayerNameEmpty,
    WrongHandicapValue(i32),
    ScoringNotImplemented(GameKind),
    ActionNotImplemented,
}

impl Display for GameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            GameError::RollIsNegative(pins) => write!(f, "negative knocked pins ({pins})"),
            GameError::RollExceedsMaxPins(pins) => {
                write!(f, "knocked pin count ({pins}) exceeds the maximum allowed")
            }
            GameError::FrameExceedsMaxPins(sum) => {
                write!(f, "frame pin count ({sum}) exceeds the maximum allowed")
            }
            GameError::NoMoreRollsAvailable => write!(f, "no more rolls available in this frame"),
            GameError::NoMoreFramesAvailable => write!(f, "no more frames to play"),
            GameError::PlayerNotFound(name) => {
                write!(f, "player {name} is not registered for the game")
            }
            GameError::PlayerAlreadyExists(name) => {
                write!(f, "player {name} is already registered")
            }
            GameError::PlayerNameEmpty => write!(f, "player name must not be empty"),
            GameError::WrongHandicapValue(value) => {
                write!(f, "handicap value {value} is out of range")
            }
            GameError::ScoringNotImplemented(kind) => {
                write!(f, "{} scoring is not implemented", kind.as_str())
            }
            GameError::ActionNotImplemented => write!(f, "action is not implemented"),
        }
    }
}

impl Error for GameError {}
