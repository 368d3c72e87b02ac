//! Player: a name, a handicap and one owned scoring engine.

use crate::core::{Ruleset, ScoringEngine, ScoringSheet};
use crate::error::GameError;
use crate::types::MAX_HANDICAP;

#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    handicap: u32,
    engine: ScoringEngine,
}

impl Player {
    /// Ten-pin player.
    pub fn new(name: impl Into<String>, handicap: i32) -> Result<Self, GameError> {
        Self::with_ruleset(name, handicap, Ruleset::tenpin())
    }

    pub fn with_ruleset(
        name: impl Into<String>,
        handicap: i32,
        ruleset: Ruleset,
    ) -> Result<Self, GameError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GameError::PlayerNameEmpty);
        }
        if handicap < 0 || handicap as u32 > MAX_HANDICAP {
            return Err(GameError::WrongHandicapValue(handicap));
        }

        Ok(Self {
            name,
            handicap: handicap as u32,
            engine: ScoringEngine::with_ruleset(ruleset),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handicap(&self) -> u32 {
        self.handicap
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn roll(&mut self, pins: i32) -> Result<(), GameError> {
        self.engine.roll(pins)
    }

    /// Project the player's sheet; handicap folds in once the game closes.
    pub fn scoring_sheet(&self) -> ScoringSheet {
        ScoringSheet::project(&self.engine, self.handicap)
    }
}
