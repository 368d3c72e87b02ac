//! Game: roster bookkeeping and per-player roll routing.
//!
//! Thin glue over the core; the engine itself never sees player names
//! or handicaps.

use crate::core::{Ruleset, ScoringSheet};
use crate::error::GameError;
use crate::player::Player;
use crate::types::GameKind;

/// One lane session: a rule set and the players rolling under it.
///
/// Roster order is registration order; lookup is by exact name.
#[derive(Debug, Clone)]
pub struct Game {
    ruleset: Ruleset,
    players: Vec<Player>,
}

impl Game {
    /// Traditional ten-pin game.
    pub fn new() -> Self {
        Self {
            ruleset: Ruleset::tenpin(),
            players: Vec::new(),
        }
    }

    pub fn for_kind(kind: GameKind) -> Result<Self, GameError> {
        Ok(Self {
            ruleset: Ruleset::for_kind(kind)?,
            players: Vec::new(),
        })
    }

    pub fn kind(&self) -> GameKind {
        self.ruleset.kind
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    pub fn add_player(&mut self, name: &str, handicap: i32) -> Result<(), GameError> {
        if self.player(name).is_some() {
            return Err(GameError::PlayerAlreadyExists(name.to_string()));
        }
        let player = Player::with_ruleset(name, handicap, self.ruleset)?;
        self.players.push(player);
        Ok(())
    }

    /// Record a roll for the named player.
    pub fn roll(&mut self, name: &str, pins: i32) -> Result<(), GameError> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.name() == name)
            .ok_or_else(|| GameError::PlayerNotFound(name.to_string()))?;
        player.roll(pins)
    }

    pub fn scoring_sheet(&self, name: &str) -> Result<ScoringSheet, GameError> {
        self.player(name)
            .map(Player::scoring_sheet)
            .ok_or_else(|| GameError::PlayerNotFound(name.to_string()))
    }

    /// Foul adjudication is out of scope for the scoring core.
    pub fn register_foul(&mut self, _name: &str) -> Result<(), GameError> {
        Err(GameError::ActionNotImplemented)
    }

    /// Split marking is out of scope for the scoring core.
    pub fn register_split(&mut self, _name: &str) -> Result<(), GameError> {
        Err(GameError::ActionNotImplemented)
    }

    /// Dead-ball adjudication is out of scope for the scoring core.
    pub fn register_deadball(&mut self, _name: &str) -> Result<(), GameError> {
        Err(GameError::ActionNotImplemented)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
