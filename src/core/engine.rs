//! Scoring engine - the frame sequence state machine
//!
//! Owns the completed frames plus the frame under construction, drives
//! advancement, propagates strike/spare bonuses backward by index and
//! performs the terminal close after the last frame.

use crate::error::GameError;
use crate::types::{
    FrameKind, GameKind, FRAME_MAX_ROLLS, LAST_FRAME_MAX_ROLLS, TENPIN_FRAMES, TENPIN_MAX_PINS,
};

use super::frame::Frame;

/// Scoring parameters selected by game kind.
///
/// This is the extension seam for other pin counts: every ten-pin rule
/// in [`Frame`] and [`ScoringEngine`] is parameterized by these two
/// numbers. Kinds without an implemented rule set fail here, before any
/// state exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ruleset {
    pub kind: GameKind,
    pub max_pins: u8,
    pub frames_per_game: usize,
}

impl Ruleset {
    /// Traditional ten-pin scoring.
    pub const fn tenpin() -> Self {
        Self {
            kind: GameKind::Tenpin,
            max_pins: TENPIN_MAX_PINS,
            frames_per_game: TENPIN_FRAMES,
        }
    }

    pub fn for_kind(kind: GameKind) -> Result<Self, GameError> {
        match kind {
            GameKind::Tenpin => Ok(Self::tenpin()),
            _ => Err(GameError::ScoringNotImplemented(kind)),
        }
    }
}

/// State machine over the frames of one player's game.
///
/// `current` is `None` exactly when the game is closed; until then the
/// engine exclusively owns the frame under construction and replaces it
/// on advancement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringEngine {
    ruleset: Ruleset,
    frames: Vec<Frame>,
    current: Option<Frame>,
    current_index: usize,
    closed: bool,
}

impl ScoringEngine {
    /// Traditional ten-pin engine.
    pub fn new() -> Self {
        Self::with_ruleset(Ruleset::tenpin())
    }

    pub fn for_kind(kind: GameKind) -> Result<Self, GameError> {
        Ok(Self::with_ruleset(Ruleset::for_kind(kind)?))
    }

    pub fn with_ruleset(ruleset: Ruleset) -> Self {
        let first_is_last = ruleset.frames_per_game == 1;
        Self {
            ruleset,
            frames: Vec::with_capacity(ruleset.frames_per_game),
            current: Some(Frame::new(ruleset.max_pins, first_is_last)),
            current_index: 0,
            closed: false,
        }
    }

    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    /// Completed frames, in play order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Frame under construction, if the game is still open.
    pub fn current_frame(&self) -> Option<&Frame> {
        self.current.as_ref()
    }

    /// Zero-based index of the frame under construction; equals
    /// `frames().len()` after every push.
    pub fn current_frame_index(&self) -> usize {
        self.current_index
    }

    pub fn closed(&self) -> bool {
        self.closed
    }

    /// Record one roll.
    ///
    /// Either the roll is rejected with no state change, or it is fully
    /// applied: recorded in the current frame, credited to earlier
    /// strike/spare frames, and frame advancement or the terminal close
    /// performed.
    pub fn roll(&mut self, pins: i32) -> Result<(), GameError> {
        let current = match self.current.as_mut() {
            Some(frame) if !self.closed => frame,
            _ => return Err(GameError::NoMoreFramesAvailable),
        };

        current.roll(pins)?;
        let nth_roll = current.rolls().len();
        let is_last = current.is_last();
        let kind = current.kind();
        // Validation capped the value already.
        let pins = pins as u8;

        self.propagate_bonus(pins, nth_roll, is_last);

        if !is_last && (kind == FrameKind::Strike || nth_roll == FRAME_MAX_ROLLS) {
            self.advance()?;
        } else if is_last && nth_roll == last_frame_rolls(kind) {
            self.close();
        }

        Ok(())
    }

    /// Credit this roll to earlier strike/spare frames.
    ///
    /// A strike collects the next two rolls, so the last frame's third
    /// roll never counts toward it; a double strike and a spare collect
    /// only the following frame's first roll.
    fn propagate_bonus(&mut self, pins: u8, nth_roll: usize, is_last: bool) {
        let Some(prev) = self.frames.len().checked_sub(1) else {
            return;
        };

        match self.frames[prev].kind() {
            FrameKind::Strike => {
                if !(is_last && nth_roll == LAST_FRAME_MAX_ROLLS) {
                    self.frames[prev].add_bonus(pins);
                }
                if nth_roll == 1 {
                    if let Some(two_back) = prev.checked_sub(1) {
                        if self.frames[two_back].kind() == FrameKind::Strike {
                            self.frames[two_back].add_bonus(pins);
                        }
                    }
                }
            }
            FrameKind::Spare => {
                if nth_roll == 1 {
                    self.frames[prev].add_bonus(pins);
                }
            }
            FrameKind::Open | FrameKind::Gutter => {}
        }
    }

    /// Push the finished frame and start the next one.
    fn advance(&mut self) -> Result<(), GameError> {
        // Unreachable under correct sequencing: only non-last frames
        // advance, so at most frames 1-9 ever pass through here.
        if self.frames.len() >= self.ruleset.frames_per_game {
            return Err(GameError::NoMoreFramesAvailable);
        }

        if let Some(finished) = self.current.take() {
            self.frames.push(finished);
        }
        self.current_index = self.frames.len();

        let next_is_last = self.current_index == self.ruleset.frames_per_game - 1;
        self.current = Some(Frame::new(self.ruleset.max_pins, next_is_last));
        Ok(())
    }

    /// Terminal transition: push the last frame and stop accepting rolls.
    fn close(&mut self) {
        if let Some(finished) = self.current.take() {
            self.frames.push(finished);
        }
        self.current_index = self.frames.len();
        self.closed = true;
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Rolls that finish the last frame for a given classification.
fn last_frame_rolls(kind: FrameKind) -> usize {
    match kind {
        FrameKind::Strike | FrameKind::Spare => LAST_FRAME_MAX_ROLLS,
        FrameKind::Open | FrameKind::Gutter => FRAME_MAX_ROLLS,
    }
}
