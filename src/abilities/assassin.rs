use crate::cards::CharacterRole;
use crate::core::{AbilityInput, GameError, PlayerId, Result, Table};
use crate::events::{AbilityEffect, GameEvent};

use super::{Ability, AbilityTarget};

/// Role 1: murders another role for the round.
///
/// The murdered role's holder is skipped when called: no income, no turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Assassin;

impl Ability for Assassin {
    fn role(&self) -> CharacterRole {
        CharacterRole::Assassin
    }

    fn needs_target(&self) -> bool {
        true
    }

    fn is_passive(&self) -> bool {
        false
    }

    fn valid_targets(&self, _table: &Table, _actor: PlayerId) -> Vec<AbilityTarget> {
        CharacterRole::ALL
            .into_iter()
            .filter(|&role| role != CharacterRole::Assassin)
            .map(|role| AbilityTarget::Role { role })
            .collect()
    }

    fn apply(&self, table: &mut Table, actor: PlayerId, input: &AbilityInput) -> Result<Vec<GameEvent>> {
        let AbilityInput::Assassinate { role } = *input else {
            return Err(GameError::InvalidAction("the assassin needs a role to murder"));
        };
        if role == CharacterRole::Assassin {
            return Err(GameError::InvalidTarget("the assassin cannot murder itself"));
        }

        table.mark_murdered(role);
        Ok(vec![GameEvent::AbilityUsed {
            player: actor,
            effect: AbilityEffect::Assassinate { role },
        }])
    }
}
