//! Game event types.
//!
//! Events describe what changed after an action was accepted. Each kind
//! has its own typed payload; `EventKind` is the bare tag for filtering.
//!
//! Events carry hidden information (drafted roles, drawn cards). The
//! transport decides who gets to see which events.

use serde::{Deserialize, Serialize};

use crate::cards::{CharacterRole, District, DistrictColor};
use crate::core::{GamePhase, PlayerId};
use crate::rules::ScoreEntry;

/// Something that happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    /// A new draft round was dealt.
    DraftStart {
        round: u32,
        face_up: Vec<CharacterRole>,
        available_count: usize,
    },
    /// A player drafted a character.
    DraftPick {
        player: PlayerId,
        role: CharacterRole,
    },
    /// Every pick was made; characters are assigned.
    DraftDone,
    /// A role was called during the roll-call.
    CharacterCall { role: CharacterRole },
    /// The called role's holder was murdered and loses the turn.
    Murdered {
        player: PlayerId,
        role: CharacterRole,
    },
    /// The called role's holder lost all gold to the Thief.
    Robbed {
        player: PlayerId,
        role: CharacterRole,
        thief: PlayerId,
        stolen: u32,
    },
    /// Primary action: gold taken.
    GoldTaken { player: PlayerId, amount: u32 },
    /// Primary action: cards drawn and kept without a choice.
    CardsDrawn {
        player: PlayerId,
        drawn: usize,
        kept: usize,
    },
    /// A drawn card was kept after a choice.
    CardKept { player: PlayerId, card: District },
    /// A district was built.
    DistrictBuilt { player: PlayerId, district: District },
    /// A character ability or district power took effect.
    AbilityUsed {
        player: PlayerId,
        effect: AbilityEffect,
    },
    /// A player ended their turn.
    TurnEnd {
        player: PlayerId,
        role: CharacterRole,
    },
    /// All eight roles were called.
    RoundEnd { round: u32 },
    /// The crown moved.
    CrownPassed { player: PlayerId },
    /// Final scores.
    GameOver { scores: Vec<ScoreEntry> },
    /// The phase changed.
    PhaseChange {
        phase: GamePhase,
        player: Option<PlayerId>,
        role: Option<CharacterRole>,
    },
    /// The active player must choose which drawn card to keep.
    DrawChoice {
        player: PlayerId,
        cards: Vec<District>,
        keep: usize,
    },
    /// Color income was paid.
    GoldCollected {
        player: PlayerId,
        color: DistrictColor,
        amount: u32,
    },
}

impl GameEvent {
    /// The event's kind tag.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            GameEvent::DraftStart { .. } => EventKind::DraftStart,
            GameEvent::DraftPick { .. } => EventKind::DraftPick,
            GameEvent::DraftDone => EventKind::DraftDone,
            GameEvent::CharacterCall { .. } => EventKind::CharacterCall,
            GameEvent::Murdered { .. } => EventKind::Murdered,
            GameEvent::Robbed { .. } => EventKind::Robbed,
            GameEvent::GoldTaken { .. } => EventKind::GoldTaken,
            GameEvent::CardsDrawn { .. } => EventKind::CardsDrawn,
            GameEvent::CardKept { .. } => EventKind::CardKept,
            GameEvent::DistrictBuilt { .. } => EventKind::DistrictBuilt,
            GameEvent::AbilityUsed { .. } => EventKind::AbilityUsed,
            GameEvent::TurnEnd { .. } => EventKind::TurnEnd,
            GameEvent::RoundEnd { .. } => EventKind::RoundEnd,
            GameEvent::CrownPassed { .. } => EventKind::CrownPassed,
            GameEvent::GameOver { .. } => EventKind::GameOver,
            GameEvent::PhaseChange { .. } => EventKind::PhaseChange,
            GameEvent::DrawChoice { .. } => EventKind::DrawChoice,
            GameEvent::GoldCollected { .. } => EventKind::GoldCollected,
        }
    }

    /// The player the event is about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::DraftPick { player, .. }
            | GameEvent::Murdered { player, .. }
            | GameEvent::Robbed { player, .. }
            | GameEvent::GoldTaken { player, .. }
            | GameEvent::CardsDrawn { player, .. }
            | GameEvent::CardKept { player, .. }
            | GameEvent::DistrictBuilt { player, .. }
            | GameEvent::AbilityUsed { player, .. }
            | GameEvent::TurnEnd { player, .. }
            | GameEvent::CrownPassed { player }
            | GameEvent::DrawChoice { player, .. }
            | GameEvent::GoldCollected { player, .. } => Some(*player),
            GameEvent::PhaseChange { player, .. } => *player,
            _ => None,
        }
    }

    pub(crate) fn phase(phase: GamePhase) -> Self {
        GameEvent::PhaseChange {
            phase,
            player: None,
            role: None,
        }
    }
}

/// Event kind tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    DraftStart,
    DraftPick,
    DraftDone,
    CharacterCall,
    Murdered,
    Robbed,
    GoldTaken,
    CardsDrawn,
    CardKept,
    DistrictBuilt,
    AbilityUsed,
    TurnEnd,
    RoundEnd,
    CrownPassed,
    GameOver,
    PhaseChange,
    DrawChoice,
    GoldCollected,
}

/// What an ability or district power did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "ability", rename_all = "snake_case")]
pub enum AbilityEffect {
    /// Assassin marked a role.
    Assassinate { role: CharacterRole },
    /// Thief marked a role.
    Rob { role: CharacterRole },
    /// Magician swapped hands.
    SwapHands { target: PlayerId },
    /// Magician discarded and redrew.
    DiscardDraw { discarded: usize, drawn: usize },
    /// Merchant bonus gold.
    MerchantBonus { gold: u32 },
    /// Architect bonus cards.
    ArchitectDraw { drawn: usize },
    /// Warlord destroyed a district.
    Destroy {
        target: PlayerId,
        district: District,
        cost: u32,
        graveyard_offered: bool,
    },
    /// Laboratory: a card discarded for gold.
    Laboratory { discarded: String },
    /// Smithy: cards bought.
    Smithy { drawn: usize },
    /// Graveyard: destroyed district bought back.
    GraveyardAccepted { district: String },
    /// Graveyard: offer declined.
    GraveyardDeclined { district: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_player() {
        let event = GameEvent::GoldTaken {
            player: PlayerId::new(2),
            amount: 2,
        };
        assert_eq!(event.kind(), EventKind::GoldTaken);
        assert_eq!(event.player(), Some(PlayerId::new(2)));

        assert_eq!(GameEvent::DraftDone.player(), None);
        assert_eq!(GameEvent::phase(GamePhase::Resolution).kind(), EventKind::PhaseChange);
    }

    #[test]
    fn test_wire_format() {
        let event = GameEvent::CharacterCall {
            role: CharacterRole::Thief,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"kind":"character_call","role":"thief"}"#);

        let event = GameEvent::AbilityUsed {
            player: PlayerId::new(0),
            effect: AbilityEffect::MerchantBonus { gold: 1 },
        };
        let back: GameEvent = serde_json::from_str(&serde_json::to_string(&event).unwrap()).unwrap();
        assert_eq!(event, back);
    }
}
