//! Rules engine trait.
//!
//! Drivers (bots, test harnesses, a transport layer) talk to a game
//! through `RulesEngine`:
//! - what actions a player may submit right now
//! - applying an action
//! - whether the game is over, and who won

use crate::core::{Action, PlayerId, Result};
use crate::events::GameEvent;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Tied for the highest score.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: empty if the player can't act
/// - `apply_action`: deterministic given the game's seed
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Every action `player` may submit in the current state.
    ///
    /// Each returned action is accepted by `apply_action`.
    fn legal_actions(&self, player: PlayerId) -> Vec<Action>;

    /// Apply an action for a player.
    fn apply_action(&mut self, player: PlayerId, action: &Action) -> Result<Vec<GameEvent>>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Check if an action is in the legal set.
    fn is_legal(&self, player: PlayerId, action: &Action) -> bool {
        self.legal_actions(player).contains(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_winner() {
        let result = GameResult::Winner(PlayerId::new(0));
        assert!(result.is_winner(PlayerId::new(0)));
        assert!(!result.is_winner(PlayerId::new(1)));
    }

    #[test]
    fn test_game_result_winners() {
        let result = GameResult::Winners(vec![PlayerId::new(0), PlayerId::new(2)]);
        assert!(result.is_winner(PlayerId::new(0)));
        assert!(!result.is_winner(PlayerId::new(1)));
        assert!(result.is_winner(PlayerId::new(2)));
    }
}
