//! Game phase state machine labels.

use serde::{Deserialize, Serialize};

/// Current phase of a game.
///
/// `Lobby -> DraftSetup -> DraftPick -> Resolution -> PlayerTurn`
/// (with `Ability` and `DrawChoice` nested inside a turn), looping per
/// round until `GameOver`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Created, not started.
    #[default]
    Lobby,
    /// Dealing out the face-down and face-up roles.
    DraftSetup,
    /// Players picking characters in crown order.
    DraftPick,
    /// Calling roles 1-8.
    Resolution,
    /// The called role's holder is acting.
    PlayerTurn,
    /// An ability awaiting input from the active player.
    Ability,
    /// Active player choosing which drawn card to keep.
    DrawChoice,
    /// Scores are final.
    GameOver,
}

impl GamePhase {
    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GamePhase::Lobby => "Lobby",
            GamePhase::DraftSetup => "DraftSetup",
            GamePhase::DraftPick => "DraftPick",
            GamePhase::Resolution => "Resolution",
            GamePhase::PlayerTurn => "PlayerTurn",
            GamePhase::Ability => "Ability",
            GamePhase::DrawChoice => "DrawChoice",
            GamePhase::GameOver => "GameOver",
        }
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
