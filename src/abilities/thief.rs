use crate::cards::CharacterRole;
use crate::core::{AbilityInput, GameError, PlayerId, Result, Table};
use crate::events::{AbilityEffect, GameEvent};

use super::{Ability, AbilityTarget};

/// Role 2: robs a role. The robbed holder's gold moves to the Thief when
/// that role is called.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Thief;

impl Thief {
    fn can_rob(table: &Table, role: CharacterRole) -> bool {
        !matches!(role, CharacterRole::Assassin | CharacterRole::Thief) && table.murdered() != Some(role)
    }
}

impl Ability for Thief {
    fn role(&self) -> CharacterRole {
        CharacterRole::Thief
    }

    fn needs_target(&self) -> bool {
        true
    }

    fn is_passive(&self) -> bool {
        false
    }

    fn valid_targets(&self, table: &Table, _actor: PlayerId) -> Vec<AbilityTarget> {
        CharacterRole::ALL
            .into_iter()
            .filter(|&role| Self::can_rob(table, role))
            .map(|role| AbilityTarget::Role { role })
            .collect()
    }

    fn apply(&self, table: &mut Table, actor: PlayerId, input: &AbilityInput) -> Result<Vec<GameEvent>> {
        let AbilityInput::Rob { role } = *input else {
            return Err(GameError::InvalidAction("the thief needs a role to rob"));
        };
        if !Self::can_rob(table, role) {
            return Err(GameError::InvalidTarget("that role cannot be robbed"));
        }

        table.mark_robbed(role);
        Ok(vec![GameEvent::AbilityUsed {
            player: actor,
            effect: AbilityEffect::Rob { role },
        }])
    }
}
