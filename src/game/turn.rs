//! Actions taken during a player's turn.

use tracing::{debug, info};

use super::{ActiveTurn, Game, PendingDraw};
use crate::abilities::Ability;
use crate::cards::{HAUNTED_CITY, LABORATORY, LIBRARY, OBSERVATORY, SMITHY};
use crate::core::{AbilityInput, GameError, GamePhase, GraveyardChoice, PlayerId, Result};
use crate::events::{AbilityEffect, GameEvent};

const GOLD_INCOME: u32 = 2;
const BASE_DRAW: usize = 2;
const OBSERVATORY_DRAW: usize = 3;
const SMITHY_COST: u32 = 2;
const SMITHY_DRAW: usize = 3;
const GRAVEYARD_COST: u32 = 1;

impl Game {
    /// The open turn, if it belongs to `player` and the phase is one of `phases`.
    fn active_turn(&self, player: PlayerId, phases: &[GamePhase]) -> Result<ActiveTurn> {
        if !phases.contains(&self.phase) {
            return Err(GameError::WrongPhase(self.phase));
        }
        let turn = self.turn.ok_or(GameError::WrongPhase(self.phase))?;
        if turn.player != player {
            return Err(GameError::NotYourTurn);
        }
        Ok(turn)
    }

    pub(super) fn take_gold(&mut self, player: PlayerId) -> Result<Vec<GameEvent>> {
        self.active_turn(player, &[GamePhase::PlayerTurn])?;
        let p = &mut self.table.players[player];
        if p.flags.took_action {
            return Err(GameError::InvalidAction("already took an action this turn"));
        }

        p.gold += GOLD_INCOME;
        p.flags.took_action = true;
        Ok(vec![GameEvent::GoldTaken {
            player,
            amount: GOLD_INCOME,
        }])
    }

    pub(super) fn draw_cards(&mut self, player: PlayerId) -> Result<Vec<GameEvent>> {
        self.active_turn(player, &[GamePhase::PlayerTurn])?;
        let p = &self.table.players[player];
        if p.flags.took_action {
            return Err(GameError::InvalidAction("already took an action this turn"));
        }

        let draw = if p.city_has(OBSERVATORY) { OBSERVATORY_DRAW } else { BASE_DRAW };
        let keep = if p.city_has(LIBRARY) { draw } else { 1 };

        let drawn = self.table.deck.draw(draw);
        let p = &mut self.table.players[player];
        p.flags.took_action = true;

        if drawn.len() <= keep {
            let count = drawn.len();
            p.hand.extend(drawn);
            return Ok(vec![GameEvent::CardsDrawn {
                player,
                drawn: count,
                kept: count,
            }]);
        }

        self.draw_choice = Some(PendingDraw {
            cards: drawn.clone(),
            keep,
        });
        self.phase = GamePhase::DrawChoice;
        Ok(vec![
            GameEvent::DrawChoice {
                player,
                cards: drawn,
                keep,
            },
            GameEvent::PhaseChange {
                phase: GamePhase::DrawChoice,
                player: Some(player),
                role: self.turn.map(|t| t.role),
            },
        ])
    }

    pub(super) fn keep_card(&mut self, player: PlayerId, index: usize) -> Result<Vec<GameEvent>> {
        let turn = self.active_turn(player, &[GamePhase::DrawChoice])?;
        let pending = self.draw_choice.as_ref().ok_or(GameError::WrongPhase(self.phase))?;
        if index >= pending.cards.len() {
            return Err(GameError::InvalidAction("no drawn card at that index"));
        }

        let Some(mut pending) = self.draw_choice.take() else {
            return Err(GameError::WrongPhase(self.phase));
        };
        let kept = pending.cards.remove(index);
        self.table.deck.return_to_bottom(pending.cards);
        self.table.players[player].hand.push(kept.clone());
        self.phase = GamePhase::PlayerTurn;

        Ok(vec![
            GameEvent::CardKept { player, card: kept },
            GameEvent::PhaseChange {
                phase: GamePhase::PlayerTurn,
                player: Some(player),
                role: Some(turn.role),
            },
        ])
    }

    /// Build a district from hand.
    ///
    /// The card leaves the hand first and goes back to the same slot if
    /// the duplicate or gold check fails.
    pub(super) fn build(&mut self, player: PlayerId, district: &str) -> Result<Vec<GameEvent>> {
        let turn = self.active_turn(player, &[GamePhase::PlayerTurn])?;
        let end_city_size = self.table.end_city_size();
        let p = &mut self.table.players[player];
        if p.flags.built_count >= turn.role.build_cap() {
            return Err(GameError::InvalidAction("build limit reached this turn"));
        }
        let Some(slot) = p.hand.iter().position(|d| d.is(district)) else {
            return Err(GameError::InvalidAction("district is not in your hand"));
        };

        let card = p.hand.remove(slot);
        if !card.is(HAUNTED_CITY) && p.city_has(&card.name) {
            let name = card.name.clone();
            p.hand.insert(slot, card);
            return Err(GameError::AlreadyBuilt(name));
        }
        if card.cost > p.gold {
            let have = p.gold;
            let need = card.cost;
            p.hand.insert(slot, card);
            return Err(GameError::NotEnoughGold { need, have });
        }

        p.gold -= card.cost;
        p.city.push(card.clone());
        p.flags.built_count += 1;
        let city_size = p.city.len();

        if city_size >= end_city_size && self.first_to_complete.is_none() {
            self.first_to_complete = Some(player);
            self.final_round = true;
            info!(%player, round = self.round, "city complete, final round");
        }

        Ok(vec![GameEvent::DistrictBuilt {
            player,
            district: card,
        }])
    }

    pub(super) fn use_ability(&mut self, player: PlayerId, input: &AbilityInput) -> Result<Vec<GameEvent>> {
        let turn = self.active_turn(player, &[GamePhase::PlayerTurn, GamePhase::Ability])?;
        if self.table.players[player].flags.used_ability {
            return Err(GameError::InvalidAction("ability already used this turn"));
        }
        let ability = *self.abilities.get(turn.role)?;
        if ability.is_passive() {
            return Err(GameError::InvalidAction("this character's ability is passive"));
        }

        let mut events = ability.apply(&mut self.table, player, input)?;
        self.table.players[player].flags.used_ability = true;

        if self.phase == GamePhase::Ability {
            self.phase = GamePhase::PlayerTurn;
            events.push(GameEvent::PhaseChange {
                phase: GamePhase::PlayerTurn,
                player: Some(player),
                role: Some(turn.role),
            });
        }
        Ok(events)
    }

    /// End the turn and resume the roll-call.
    ///
    /// An unanswered Graveyard offer is forfeited: the card goes to the
    /// bottom of the deck.
    pub(super) fn end_turn(&mut self, player: PlayerId) -> Result<Vec<GameEvent>> {
        let turn = self.active_turn(player, &[GamePhase::PlayerTurn])?;

        let mut events = Vec::new();
        if let Some(pending) = self.table.pending_graveyard.take() {
            debug!(player = %pending.player, district = %pending.district, "graveyard offer forfeited");
            events.push(GameEvent::AbilityUsed {
                player: pending.player,
                effect: AbilityEffect::GraveyardDeclined {
                    district: pending.district.name.clone(),
                },
            });
            self.table.deck.return_to_bottom([pending.district]);
        }

        events.push(GameEvent::TurnEnd {
            player,
            role: turn.role,
        });
        events.extend(self.resume_roll_call()?);
        Ok(events)
    }

    pub(super) fn lab_discard(&mut self, player: PlayerId, district: &str) -> Result<Vec<GameEvent>> {
        self.active_turn(player, &[GamePhase::PlayerTurn])?;
        let p = &mut self.table.players[player];
        if !p.city_has(LABORATORY) {
            return Err(GameError::InvalidAction("no laboratory in your city"));
        }
        if p.flags.used_lab {
            return Err(GameError::InvalidAction("laboratory already used this turn"));
        }
        let Some(card) = p.remove_from_hand(district) else {
            return Err(GameError::InvalidAction("district is not in your hand"));
        };

        p.gold += 1;
        p.flags.used_lab = true;
        let discarded = card.name.clone();
        self.table.deck.return_to_bottom([card]);
        Ok(vec![GameEvent::AbilityUsed {
            player,
            effect: AbilityEffect::Laboratory { discarded },
        }])
    }

    pub(super) fn smithy_draw(&mut self, player: PlayerId) -> Result<Vec<GameEvent>> {
        self.active_turn(player, &[GamePhase::PlayerTurn])?;
        let p = &self.table.players[player];
        if !p.city_has(SMITHY) {
            return Err(GameError::InvalidAction("no smithy in your city"));
        }
        if p.flags.used_smithy {
            return Err(GameError::InvalidAction("smithy already used this turn"));
        }
        if p.gold < SMITHY_COST {
            return Err(GameError::NotEnoughGold {
                need: SMITHY_COST,
                have: p.gold,
            });
        }

        let drawn = self.table.deck.draw(SMITHY_DRAW);
        let count = drawn.len();
        let p = &mut self.table.players[player];
        p.gold -= SMITHY_COST;
        p.flags.used_smithy = true;
        p.hand.extend(drawn);
        Ok(vec![GameEvent::AbilityUsed {
            player,
            effect: AbilityEffect::Smithy { drawn: count },
        }])
    }

    /// Answer a Graveyard offer. Allowed in any phase while the offer stands.
    pub(super) fn graveyard_respond(&mut self, player: PlayerId, choice: GraveyardChoice) -> Result<Vec<GameEvent>> {
        let Some(pending) = self.table.pending_graveyard() else {
            return Err(GameError::InvalidAction("no graveyard choice pending"));
        };
        if pending.player != player {
            return Err(GameError::InvalidAction("the graveyard choice is not yours"));
        }
        let have = self.table.players[player].gold;
        if choice == GraveyardChoice::Accept && have < GRAVEYARD_COST {
            return Err(GameError::NotEnoughGold {
                need: GRAVEYARD_COST,
                have,
            });
        }

        let Some(pending) = self.table.pending_graveyard.take() else {
            return Err(GameError::InvalidAction("no graveyard choice pending"));
        };
        let district = pending.district.name.clone();
        let effect = match choice {
            GraveyardChoice::Accept => {
                let p = &mut self.table.players[player];
                p.gold -= GRAVEYARD_COST;
                p.hand.push(pending.district);
                AbilityEffect::GraveyardAccepted { district }
            }
            GraveyardChoice::Decline => {
                self.table.deck.return_to_bottom([pending.district]);
                AbilityEffect::GraveyardDeclined { district }
            }
        };
        Ok(vec![GameEvent::AbilityUsed { player, effect }])
    }
}
