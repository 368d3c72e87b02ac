//! Core types shared across the application
//! This module contains pure data types with no external dependencies

use std::fmt;

/// Pins standing at the start of every ten-pin frame.
pub const TENPIN_MAX_PINS: u8 = 10;
/// Frames in a regulation ten-pin game.
pub const TENPIN_FRAMES: usize = 10;

/// Rolls per frame (frames 1-9).
pub const FRAME_MAX_ROLLS: usize = 2;
/// Rolls in the last frame when it opens with a strike or ends as a spare.
pub const LAST_FRAME_MAX_ROLLS: usize = 3;

/// League handicap cap.
pub const MAX_HANDICAP: u32 = 220;

/// Rule sets a game can be scored under.
///
/// Only `Tenpin` (traditional scoring) is implemented; the other kinds
/// exist as an extension seam and fail early with `ScoringNotImplemented`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Tenpin,
    TenpinIbf,
    NinepinEu,
    NinepinUs,
    Candlepin,
    Duckpin,
    Fivepin,
}

impl GameKind {
    /// Parse game kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tenpin" => Some(GameKind::Tenpin),
            "tenpin_ibf" => Some(GameKind::TenpinIbf),
            "ninepin_eu" => Some(GameKind::NinepinEu),
            "ninepin_us" => Some(GameKind::NinepinUs),
            "candlepin" => Some(GameKind::Candlepin),
            "duckpin" => Some(GameKind::Duckpin),
            "fivepin" => Some(GameKind::Fivepin),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Tenpin => "tenpin",
            GameKind::TenpinIbf => "tenpin_ibf",
            GameKind::NinepinEu => "ninepin_eu",
            GameKind::NinepinUs => "ninepin_us",
            GameKind::Candlepin => "candlepin",
            GameKind::Duckpin => "duckpin",
            GameKind::Fivepin => "fivepin",
        }
    }
}

/// Frame classification after the rolls recorded so far.
///
/// A frame starts `Open` and is reclassified after each roll; once it
/// becomes `Strike`, `Spare` or `Gutter` it keeps that kind for the rest
/// of the frame's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    /// One or more pins still standing after both rolls.
    Open,
    /// All pins downed by the first roll.
    Strike,
    /// All pins downed across both rolls.
    Spare,
    /// Both rolls scored zero.
    Gutter,
}

impl FrameKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameKind::Open => "open",
            FrameKind::Strike => "strike",
            FrameKind::Spare => "spare",
            FrameKind::Gutter => "gutter",
        }
    }
}

/// Display token for a single roll on the score sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RollMark {
    /// "X" - all pins on one roll.
    Strike,
    /// "/" - the roll that completes a spare.
    Spare,
    /// "-" - a zero roll with no special marker.
    Miss,
    /// Plain pin count (1-9).
    Pins(u8),
}

impl fmt::Display for RollMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RollMark::Strike => write!(f, "X"),
            RollMark::Spare => write!(f, "/"),
            RollMark::Miss => write!(f, "-"),
            RollMark::Pins(n) => write!(f, "{n}"),
        }
    }
}
