//! Score sheet projection - a read-only view of engine state
//!
//! Recomputed on every call and never retained by the engine, so an
//! in-progress game exposes a partial cumulative score.

use std::fmt;

use crate::types::{FrameKind, RollMark};

use super::engine::ScoringEngine;

/// One frame column on the sheet, with the running total through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameCell {
    pub index: usize,
    pub kind: FrameKind,
    pub marks: Vec<RollMark>,
    /// Cumulative score through this frame.
    pub score: u32,
}

impl FrameCell {
    pub fn is_strike(&self) -> bool {
        self.kind == FrameKind::Strike
    }

    pub fn is_spare(&self) -> bool {
        self.kind == FrameKind::Spare
    }
}

/// Cumulatively scored sheet for one player's game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringSheet {
    pub frames: Vec<FrameCell>,
    /// Total before handicap.
    pub scratch: u32,
    pub handicap: u32,
    pub closed: bool,
}

impl ScoringSheet {
    /// Project the engine's current state.
    ///
    /// Pure: two projections with no roll in between are identical. A
    /// frame still in play contributes a cell once it has a roll.
    pub fn project(engine: &ScoringEngine, handicap: u32) -> Self {
        let mut cells = Vec::with_capacity(engine.frames().len() + 1);
        let mut running = 0u32;

        for (index, frame) in engine.frames().iter().enumerate() {
            running += frame.score();
            cells.push(FrameCell {
                index,
                kind: frame.kind(),
                marks: frame.marks().to_vec(),
                score: running,
            });
        }

        if !engine.closed() {
            if let Some(current) = engine.current_frame() {
                if !current.rolls().is_empty() {
                    running += current.score();
                    cells.push(FrameCell {
                        index: engine.current_frame_index(),
                        kind: current.kind(),
                        marks: current.marks().to_vec(),
                        score: running,
                    });
                }
            }
        }

        Self {
            frames: cells,
            scratch: running,
            handicap,
            closed: engine.closed(),
        }
    }

    /// Final score: handicap counts only once the game is finished.
    pub fn total(&self) -> u32 {
        if self.closed {
            self.scratch + self.handicap
        } else {
            self.scratch
        }
    }
}

impl fmt::Display for ScoringSheet {
    /// Plain two-row sheet: marks on top, running totals below.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marks: Vec<String> = self
            .frames
            .iter()
            .map(|cell| {
                cell.marks
                    .iter()
                    .map(|m| m.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        let scores: Vec<String> = self.frames.iter().map(|c| c.score.to_string()).collect();

        writeln!(f, "{}", marks.join("\t"))?;
        write!(f, "{}", scores.join("\t"))?;
        if self.closed && self.handicap > 0 {
            write!(f, "\t + {} = {}", self.handicap, self.total())?;
        }
        Ok(())
    }
}
