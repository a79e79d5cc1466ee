//! Read-model projections.
//!
//! The public view is what the whole table may see: no hand contents,
//! no undrawn or face-down roles, and characters only once called. The
//! player view adds that player's private information and what they can
//! do right now.

use serde::{Deserialize, Serialize};

use super::{ActiveTurn, Game};
use crate::abilities::{Ability, AbilityTarget};
use crate::cards::{CharacterRole, District, LABORATORY, SMITHY};
use crate::core::{GamePhase, PlayerId, Result};
use crate::rules::ScoreEntry;

/// One player as everyone sees them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicPlayerView {
    pub id: PlayerId,
    pub name: String,
    pub gold: u32,
    pub hand_size: usize,
    pub city: Vec<District>,
    pub has_crown: bool,
    /// Characters already called this round.
    pub revealed_roles: Vec<CharacterRole>,
}

/// Where the draft stands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftProgress {
    pub face_up: Vec<CharacterRole>,
    pub available_count: usize,
    pub current_picker: Option<PlayerId>,
    pub picks_made: usize,
    pub picks_total: usize,
}

/// The table as everyone sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicView {
    pub phase: GamePhase,
    pub round: u32,
    pub players: Vec<PublicPlayerView>,
    pub call_pointer: Option<CharacterRole>,
    pub current_turn: Option<ActiveTurn>,
    pub draft: Option<DraftProgress>,
    pub deck_size: usize,
    pub scores: Vec<ScoreEntry>,
}

/// A Graveyard offer addressed to the viewing player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraveyardOffer {
    pub district: District,
    pub cost: u32,
}

/// The game as one player sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    #[serde(flatten)]
    pub public: PublicView,
    pub player: PlayerId,
    pub hand: Vec<District>,
    pub characters: Vec<CharacterRole>,
    pub is_my_turn: bool,
    pub can_take_action: bool,
    pub can_build: bool,
    pub can_use_ability: bool,
    pub can_use_lab: bool,
    pub can_use_smithy: bool,
    pub valid_targets: Vec<AbilityTarget>,
    /// Roles this player may pick, when it is their draft pick.
    pub draft_choices: Vec<CharacterRole>,
    pub drawn_cards: Vec<District>,
    pub keep_count: usize,
    pub graveyard: Option<GraveyardOffer>,
}

impl Game {
    /// What every player may see.
    #[must_use]
    pub fn public_view(&self) -> PublicView {
        let called = self.call_pointer;
        let players = self
            .table
            .players()
            .values()
            .map(|p| PublicPlayerView {
                id: p.id,
                name: p.name.clone(),
                gold: p.gold,
                hand_size: p.hand.len(),
                city: p.city.clone(),
                has_crown: p.has_crown,
                revealed_roles: p
                    .characters
                    .iter()
                    .copied()
                    .filter(|&role| called.is_some_and(|c| role <= c))
                    .collect(),
            })
            .collect();

        let draft = self.draft.as_ref().map(|d| DraftProgress {
            face_up: d.face_up().to_vec(),
            available_count: d.available().len(),
            current_picker: d.current_picker(),
            picks_made: d.picks_made(),
            picks_total: d.pick_order().len(),
        });

        PublicView {
            phase: self.phase,
            round: self.round,
            players,
            call_pointer: self.call_pointer,
            current_turn: self.turn,
            draft,
            deck_size: self.table.deck().len(),
            scores: self.scores.clone(),
        }
    }

    /// What `player` may see, including their hand and options.
    pub fn view_for(&self, player: PlayerId) -> Result<PlayerView> {
        let me = self.table.player(player)?;
        let is_my_turn = self.turn.is_some_and(|t| t.player == player);
        let acting = is_my_turn && self.phase == GamePhase::PlayerTurn;

        let mut view = PlayerView {
            public: self.public_view(),
            player,
            hand: me.hand.clone(),
            characters: me.characters.to_vec(),
            is_my_turn,
            can_take_action: acting && !me.flags.took_action,
            can_build: false,
            can_use_ability: false,
            can_use_lab: acting && me.city_has(LABORATORY) && !me.flags.used_lab && !me.hand.is_empty(),
            can_use_smithy: acting && me.city_has(SMITHY) && !me.flags.used_smithy && me.gold >= 2,
            valid_targets: Vec::new(),
            draft_choices: Vec::new(),
            drawn_cards: Vec::new(),
            keep_count: 0,
            graveyard: None,
        };

        if let Some(turn) = self.turn.filter(|_| acting) {
            view.can_build = me.flags.built_count < turn.role.build_cap();
            if let Ok(ability) = self.abilities.get(turn.role) {
                if !ability.is_passive() && !me.flags.used_ability {
                    view.can_use_ability = true;
                    view.valid_targets = ability.valid_targets(&self.table, player);
                }
            }
        }

        if self.phase == GamePhase::DraftPick {
            if let Some(draft) = self.draft.as_ref().filter(|d| d.current_picker() == Some(player)) {
                view.draft_choices = draft.available().to_vec();
            }
        }

        if let Some(pending) = self.draw_choice.as_ref().filter(|_| is_my_turn) {
            view.drawn_cards = pending.cards.clone();
            view.keep_count = pending.keep;
        }

        if let Some(pending) = self.table.pending_graveyard().filter(|g| g.player == player) {
            view.graveyard = Some(GraveyardOffer {
                district: pending.district.clone(),
                cost: 1,
            });
        }

        Ok(view)
    }
}
