use crate::cards::CharacterRole;
use crate::core::{AbilityInput, PlayerId, Result, Table};
use crate::events::GameEvent;

use super::{Ability, AbilityTarget};

/// Role 5: nothing happens on call.
///
/// Religious income comes from the color step. Protection from the
/// Warlord is checked by the Warlord.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bishop;

impl Ability for Bishop {
    fn role(&self) -> CharacterRole {
        CharacterRole::Bishop
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

    fn apply(&self, _table: &mut Table, _actor: PlayerId, _input: &AbilityInput) -> Result<Vec<GameEvent>> {
        Ok(Vec::new())
    }
}
