//! Error types.
//!
//! Every gameplay failure is a validation result returned to the acting
//! player; the game state is unchanged when one is returned.
//! `MissingAbility` is the one integrity fault: it means the ability
//! registry was built wrong and the game instance cannot be used.

use thiserror::Error;

use super::phase::GamePhase;
use super::player::PlayerId;
use crate::cards::CharacterRole;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("wrong phase for this action (phase is {0})")]
    WrongPhase(GamePhase),

    #[error("not your turn")]
    NotYourTurn,

    #[error("invalid action: {0}")]
    InvalidAction(&'static str),

    #[error("invalid target: {0}")]
    InvalidTarget(&'static str),

    #[error("player not found: {0}")]
    PlayerNotFound(PlayerId),

    #[error("not enough gold (need {need}, have {have})")]
    NotEnoughGold { need: u32, have: u32 },

    #[error("already built a district named {0}")]
    AlreadyBuilt(String),

    #[error("a game needs 2 to 7 players, got {0}")]
    InvalidPlayerCount(usize),

    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("no ability registered for {0}")]
    MissingAbility(CharacterRole),
}

impl GameError {
    /// False only for faults that make the game instance unusable.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::MissingAbility(_))
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
