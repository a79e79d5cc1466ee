use crate::cards::CharacterRole;
use crate::core::{AbilityInput, GameError, PlayerId, Result, Table};
use crate::events::GameEvent;

use super::{Ability, AbilityTarget};

/// Role 4: takes the crown when called. Noble income is paid by the
/// roll-call's color step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct King;

impl Ability for King {
    fn role(&self) -> CharacterRole {
        CharacterRole::King
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
            return Err(GameError::InvalidAction("the king's ability is passive"));
        }
        table.player(actor)?;

        table.pass_crown(actor);
        Ok(vec![GameEvent::CrownPassed { player: actor }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::test_support::table;

    #[test]
    fn test_takes_crown() {
        let mut t = table(3);
        t.pass_crown(PlayerId::new(0));

        let events = King
            .apply(&mut t, PlayerId::new(2), &AbilityInput::Trigger)
            .unwrap();

        assert_eq!(t.crown_holder(), Some(PlayerId::new(2)));
        assert_eq!(events, vec![GameEvent::CrownPassed { player: PlayerId::new(2) }]);
    }

    #[test]
    fn test_unknown_player() {
        let mut t = table(3);
        t.pass_crown(PlayerId::new(0));
        assert!(King.apply(&mut t, PlayerId::new(5), &AbilityInput::Trigger).is_err());
        assert_eq!(t.crown_holder(), Some(PlayerId::new(0)));
    }
}
