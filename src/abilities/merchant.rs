use crate::cards::CharacterRole;
use crate::core::{AbilityInput, GameError, PlayerId, Result, Table};
use crate::events::{AbilityEffect, GameEvent};

use super::{Ability, AbilityTarget};

const MERCHANT_BONUS: u32 = 1;

/// Role 6: one extra gold when called, on top of trade income.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Merchant;

impl Ability for Merchant {
    fn role(&self) -> CharacterRole {
        CharacterRole::Merchant
    }

    fn needs_target(&self) -> bool {
        false
    }

    fn is_passive(&self) -> bool {
        true
    }

    fn valid_targets(&self, _table: &Table, _actor: PlayerId) -> Vec<AbilityTarget> {
        Vec::new()
    }

    fn apply(&self, table: &mut Table, actor: PlayerId, input: &AbilityInput) -> Result<Vec<GameEvent>> {
        if *input != AbilityInput::Trigger {
            return Err(GameError::InvalidAction("the merchant's ability is passive"));
        }

        table.player_mut(actor)?.gold += MERCHANT_BONUS;
        Ok(vec![GameEvent::AbilityUsed {
            player: actor,
            effect: AbilityEffect::MerchantBonus { gold: MERCHANT_BONUS },
        }])
    }
}
