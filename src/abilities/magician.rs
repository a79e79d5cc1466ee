use crate::cards::CharacterRole;
use crate::core::{AbilityInput, GameError, PlayerId, Result, Table};
use crate::events::{AbilityEffect, GameEvent};

use super::{Ability, AbilityTarget};

/// Role 3: swap hands with another player, or discard cards and redraw
/// as many.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Magician;

impl Magician {
    fn swap_hands(table: &mut Table, actor: PlayerId, target: PlayerId) -> Result<Vec<GameEvent>> {
        if target == actor {
            return Err(GameError::InvalidTarget("cannot swap hands with yourself"));
        }
        table.player(actor)?;
        let theirs = std::mem::take(&mut table.player_mut(target)?.hand);
        let mine = std::mem::replace(&mut table.player_mut(actor)?.hand, theirs);
        table.player_mut(target)?.hand = mine;

        Ok(vec![GameEvent::AbilityUsed {
            player: actor,
            effect: AbilityEffect::SwapHands { target },
        }])
    }

    fn discard_draw(table: &mut Table, actor: PlayerId, indices: &[usize]) -> Result<Vec<GameEvent>> {
        if indices.is_empty() {
            return Err(GameError::InvalidAction("no cards chosen to discard"));
        }
        let hand_len = table.player(actor)?.hand.len();
        if indices.iter().any(|&i| i >= hand_len) {
            return Err(GameError::InvalidTarget("hand index out of range"));
        }

        let mut order = indices.to_vec();
        order.sort_unstable();
        order.dedup();

        // Remove from the back so earlier indices stay valid.
        let player = table.player_mut(actor)?;
        let mut discarded: Vec<_> = order.iter().rev().map(|&i| player.hand.remove(i)).collect();
        discarded.reverse();
        let count = discarded.len();

        let deck = table.deck_mut();
        deck.return_to_bottom(discarded);
        let drawn = deck.draw(count);
        let drawn_count = drawn.len();
        table.player_mut(actor)?.hand.extend(drawn);

        Ok(vec![GameEvent::AbilityUsed {
            player: actor,
            effect: AbilityEffect::DiscardDraw {
                discarded: count,
                drawn: drawn_count,
            },
        }])
    }
}

impl Ability for Magician {
    fn role(&self) -> CharacterRole {
        CharacterRole::Magician
    }

    fn needs_target(&self) -> bool {
        true
    }

    fn is_passive(&self) -> bool {
        false
    }

    fn valid_targets(&self, table: &Table, actor: PlayerId) -> Vec<AbilityTarget> {
        let mut targets: Vec<_> = table
            .players()
            .player_ids()
            .filter(|&p| p != actor)
            .map(|player| AbilityTarget::Player { player })
            .collect();
        if let Ok(me) = table.player(actor) {
            if !me.hand.is_empty() {
                targets.push(AbilityTarget::OwnHand { size: me.hand.len() });
            }
        }
        targets
    }

    fn apply(&self, table: &mut Table, actor: PlayerId, input: &AbilityInput) -> Result<Vec<GameEvent>> {
        match input {
            AbilityInput::SwapHands { target } => Self::swap_hands(table, actor, *target),
            AbilityInput::DiscardDraw { indices } => Self::discard_draw(table, actor, indices),
            _ => Err(GameError::InvalidAction(
                "the magician swaps hands or discards and draws",
            )),
        }
    }
}
