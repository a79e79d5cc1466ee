//! Player action vocabulary.
//!
//! Every input a player can submit is one `Action` variant with typed
//! fields. The ability action carries an `AbilityInput` whose shape
//! depends on the role whose turn it is.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::cards::CharacterRole;

/// A player action.
///
/// ```
/// use citadel_core::core::{Action, AbilityInput};
/// use citadel_core::cards::CharacterRole;
///
/// let pick = Action::DraftPick { role: CharacterRole::King };
/// let kill = Action::Ability { input: AbilityInput::Assassinate { role: CharacterRole::Merchant } };
/// assert_eq!(pick.name(), "draft_pick");
/// assert_eq!(kill.name(), "ability");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Pick a character during the draft.
    DraftPick { role: CharacterRole },
    /// Primary action: take 2 gold.
    TakeGold,
    /// Primary action: draw cards and keep some.
    DrawCards,
    /// Keep one drawn card (DrawChoice only).
    KeepCard { index: usize },
    /// Build a district from hand.
    Build { district: String },
    /// Use the current role's ability.
    Ability { input: AbilityInput },
    /// End the turn.
    EndTurn,
    /// Laboratory: discard a hand card for 1 gold.
    LabDiscard { district: String },
    /// Smithy: pay 2 gold, draw 3 cards.
    SmithyDraw,
    /// Answer a pending Graveyard offer.
    GraveyardRespond { choice: GraveyardChoice },
}

impl Action {
    /// Wire name of the action kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Action::DraftPick { .. } => "draft_pick",
            Action::TakeGold => "take_gold",
            Action::DrawCards => "draw_cards",
            Action::KeepCard { .. } => "keep_card",
            Action::Build { .. } => "build",
            Action::Ability { .. } => "ability",
            Action::EndTurn => "end_turn",
            Action::LabDiscard { .. } => "lab_discard",
            Action::SmithyDraw => "smithy_draw",
            Action::GraveyardRespond { .. } => "graveyard_respond",
        }
    }
}

/// Role-specific ability input.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AbilityInput {
    /// Fired by the roll-call for passive abilities; not a player input.
    Trigger,
    /// Assassin: murder a role.
    Assassinate { role: CharacterRole },
    /// Thief: rob a role.
    Rob { role: CharacterRole },
    /// Magician: swap hands with another player.
    SwapHands { target: PlayerId },
    /// Magician: discard the cards at these hand indices and redraw as many.
    DiscardDraw { indices: SmallVec<[usize; 4]> },
    /// Warlord: destroy a district in another player's city.
    Destroy { target: PlayerId, district: String },
}

/// Answer to a Graveyard offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraveyardChoice {
    /// Pay 1 gold, take the destroyed district into hand.
    Accept,
    /// Let the district go.
    Decline,
}

/// An accepted action, kept in the game's history.
///
/// Used for replay and debugging; with the game seed, the history
/// reproduces the game exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Round number when the action was taken.
    pub round: u32,

    /// Sequence number across the whole game.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, round: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            round,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_wire_format() {
        let action = Action::Build {
            district: "Temple".into(),
        };
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, r#"{"type":"build","district":"Temple"}"#);

        let json = serde_json::to_string(&Action::EndTurn).unwrap();
        assert_eq!(json, r#"{"type":"end_turn"}"#);
    }

    #[test]
    fn test_ability_input_serialization() {
        let action = Action::Ability {
            input: AbilityInput::Destroy {
                target: PlayerId::new(2),
                district: "Prison".into(),
            },
        };
        let json = serde_json::to_string(&action).unwrap();
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, back);

        let parsed: Action =
            serde_json::from_str(r#"{"type":"ability","input":{"mode":"rob","role":"merchant"}}"#)
                .unwrap();
        assert_eq!(
            parsed,
            Action::Ability {
                input: AbilityInput::Rob {
                    role: CharacterRole::Merchant
                }
            }
        );
    }

    #[test]
    fn test_graveyard_choice_parse() {
        let parsed: Action =
            serde_json::from_str(r#"{"type":"graveyard_respond","choice":"accept"}"#).unwrap();
        assert_eq!(
            parsed,
            Action::GraveyardRespond {
                choice: GraveyardChoice::Accept
            }
        );
    }

    #[test]
    fn test_action_record() {
        let record = ActionRecord::new(PlayerId::new(1), Action::TakeGold, 3, 17);
        assert_eq!(record.player, PlayerId::new(1));
        assert_eq!(record.round, 3);
        assert_eq!(record.sequence, 17);
    }
}
