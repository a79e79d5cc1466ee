use crate::cards::CharacterRole;
use crate::core::{AbilityInput, GameError, PlayerId, Result, Table};
use crate::events::{AbilityEffect, GameEvent};

use super::{Ability, AbilityTarget};

const ARCHITECT_DRAW: usize = 2;

/// Role 7: draws two cards when called.
///
/// The raised build cap is looked up from the active role
/// (`CharacterRole::build_cap`), not stored here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Architect;

impl Ability for Architect {
    fn role(&self) -> CharacterRole {
        CharacterRole::Architect
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
            return Err(GameError::InvalidAction("the architect's ability is passive"));
        }
        table.player(actor)?;

        let drawn = table.deck_mut().draw(ARCHITECT_DRAW);
        let count = drawn.len();
        table.player_mut(actor)?.hand.extend(drawn);

        Ok(vec![GameEvent::AbilityUsed {
            player: actor,
            effect: AbilityEffect::ArchitectDraw { drawn: count },
        }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::test_support::table;

    #[test]
    fn test_draws_two() {
        let mut t = table(2);
        let before = t.deck().len();
        Architect
            .apply(&mut t, PlayerId::new(0), &AbilityInput::Trigger)
            .unwrap();

        assert_eq!(t.player(PlayerId::new(0)).unwrap().hand.len(), 2);
        assert_eq!(t.deck().len(), before - 2);
        assert_eq!(t.card_count(), before);
    }
}
