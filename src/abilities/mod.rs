//! Character abilities.
//!
//! Every role implements the `Ability` contract. Passive abilities fire
//! from the roll-call the moment their role is called; the others need an
//! explicit `Action::Ability` during the holder's turn.
//!
//! Abilities only see the `Table`: gold, hands, cities, the crown, the deck
//! and the round markers. Phases and the roll-call belong to the game.
//!
//! ## Example
//!
//! ```
//! use citadel_core::abilities::{Ability, AbilityRegistry};
//! use citadel_core::cards::CharacterRole;
//!
//! let registry = AbilityRegistry::standard();
//! let king = registry.get(CharacterRole::King).unwrap();
//! assert!(king.is_passive());
//! assert!(!king.needs_target());
//! ```

mod architect;
mod assassin;
mod bishop;
mod king;
mod magician;
mod merchant;
mod thief;
mod warlord;

use serde::{Deserialize, Serialize};

use crate::cards::CharacterRole;
use crate::core::{AbilityInput, GameError, PlayerId, Result, Table};
use crate::events::GameEvent;

pub use architect::Architect;
pub use assassin::Assassin;
pub use bishop::Bishop;
pub use king::King;
pub use magician::Magician;
pub use merchant::Merchant;
pub use thief::Thief;
pub use warlord::Warlord;

/// Something an ability can be aimed at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum AbilityTarget {
    /// A character role.
    Role { role: CharacterRole },
    /// Another player.
    Player { player: PlayerId },
    /// The actor's own hand (Magician discard-and-draw).
    OwnHand { size: usize },
    /// A district in another player's city, with the price to destroy it.
    District {
        owner: PlayerId,
        name: String,
        cost: u32,
    },
}

/// The shared ability contract.
pub trait Ability {
    /// The role this ability belongs to.
    fn role(&self) -> CharacterRole;

    /// Whether using the ability requires choosing a target.
    fn needs_target(&self) -> bool;

    /// Whether the ability fires automatically when the role is called.
    fn is_passive(&self) -> bool;

    /// Targets the actor could legally choose right now.
    ///
    /// Empty for abilities that take no target.
    fn valid_targets(&self, table: &Table, actor: PlayerId) -> Vec<AbilityTarget>;

    /// Apply the ability.
    ///
    /// Validation happens before any mutation: on `Err` the table is
    /// unchanged.
    fn apply(&self, table: &mut Table, actor: PlayerId, input: &AbilityInput) -> Result<Vec<GameEvent>>;
}

/// The closed set of ability implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharacterAbility {
    Assassin(Assassin),
    Thief(Thief),
    Magician(Magician),
    King(King),
    Bishop(Bishop),
    Merchant(Merchant),
    Architect(Architect),
    Warlord(Warlord),
}

impl CharacterAbility {
    /// The standard implementation for a role.
    #[must_use]
    pub const fn for_role(role: CharacterRole) -> Self {
        match role {
            CharacterRole::Assassin => CharacterAbility::Assassin(Assassin),
            CharacterRole::Thief => CharacterAbility::Thief(Thief),
            CharacterRole::Magician => CharacterAbility::Magician(Magician),
            CharacterRole::King => CharacterAbility::King(King),
            CharacterRole::Bishop => CharacterAbility::Bishop(Bishop),
            CharacterRole::Merchant => CharacterAbility::Merchant(Merchant),
            CharacterRole::Architect => CharacterAbility::Architect(Architect),
            CharacterRole::Warlord => CharacterAbility::Warlord(Warlord),
        }
    }

    fn inner(&self) -> &dyn Ability {
        match self {
            CharacterAbility::Assassin(a) => a,
            CharacterAbility::Thief(a) => a,
            CharacterAbility::Magician(a) => a,
            CharacterAbility::King(a) => a,
            CharacterAbility::Bishop(a) => a,
            CharacterAbility::Merchant(a) => a,
            CharacterAbility::Architect(a) => a,
            CharacterAbility::Warlord(a) => a,
        }
    }
}

impl Ability for CharacterAbility {
    fn role(&self) -> CharacterRole {
        self.inner().role()
    }

    fn needs_target(&self) -> bool {
        self.inner().needs_target()
    }

    fn is_passive(&self) -> bool {
        self.inner().is_passive()
    }

    fn valid_targets(&self, table: &Table, actor: PlayerId) -> Vec<AbilityTarget> {
        self.inner().valid_targets(table, actor)
    }

    fn apply(&self, table: &mut Table, actor: PlayerId, input: &AbilityInput) -> Result<Vec<GameEvent>> {
        self.inner().apply(table, actor, input)
    }
}

/// Maps each role to its ability.
///
/// Resolved once when a game is built; a game refuses to start with an
/// incomplete registry.
#[derive(Clone, Debug, Default)]
pub struct AbilityRegistry {
    slots: [Option<CharacterAbility>; CharacterRole::COUNT],
}

impl AbilityRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding all eight standard abilities.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for role in CharacterRole::ALL {
            registry.register(CharacterAbility::for_role(role));
        }
        registry
    }

    /// Register an ability under its role.
    ///
    /// # Panics
    ///
    /// Panics if the role already has an ability.
    pub fn register(&mut self, ability: CharacterAbility) {
        let role = ability.role();
        let slot = &mut self.slots[role.index()];
        if slot.is_some() {
            panic!("Ability for {} already registered", role);
        }
        *slot = Some(ability);
    }

    /// Look up the ability for a role.
    pub fn get(&self, role: CharacterRole) -> Result<&CharacterAbility> {
        self.slots[role.index()]
            .as_ref()
            .ok_or(GameError::MissingAbility(role))
    }

    /// Check every role has an ability.
    pub fn validate(&self) -> Result<()> {
        for role in CharacterRole::ALL {
            self.get(role)?;
        }
        Ok(())
    }

    /// Number of registered abilities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Check if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::cards::{CharacterRole, District, DistrictColor};
    use crate::core::{Player, PlayerId, PlayerMap, Table};
    use crate::zones::Deck;

    /// A table with `n` players and a small ordered deck.
    pub fn table(n: usize) -> Table {
        let players = PlayerMap::new(n, |id| Player::new(id, format!("P{}", id.0)));
        let deck = Deck::from_ordered(
            (0..10)
                .map(|i| District::new(format!("Card{}", i), DistrictColor::Trade, 1))
                .collect(),
        );
        Table::new(players, deck, 7)
    }

    pub fn give_role(table: &mut Table, player: u8, role: CharacterRole) {
        table.players[PlayerId::new(player)].characters.push(role);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_is_complete() {
        let registry = AbilityRegistry::standard();
        assert_eq!(registry.len(), 8);
        assert!(registry.validate().is_ok());

        for role in CharacterRole::ALL {
            assert_eq!(registry.get(role).unwrap().role(), role);
        }
    }

    #[test]
    fn test_missing_ability_is_fatal() {
        let mut registry = AbilityRegistry::new();
        registry.register(CharacterAbility::for_role(CharacterRole::King));

        let err = registry.validate().unwrap_err();
        assert_eq!(err, GameError::MissingAbility(CharacterRole::Assassin));
        assert!(!err.is_recoverable());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_registration_panics() {
        let mut registry = AbilityRegistry::new();
        registry.register(CharacterAbility::for_role(CharacterRole::Thief));
        registry.register(CharacterAbility::for_role(CharacterRole::Thief));
    }

    #[test]
    fn test_passivity_table() {
        let registry = AbilityRegistry::standard();
        let passive: Vec<_> = CharacterRole::ALL
            .into_iter()
            .filter(|&r| registry.get(r).unwrap().is_passive())
            .collect();
        assert_eq!(
            passive,
            vec![
                CharacterRole::King,
                CharacterRole::Bishop,
                CharacterRole::Merchant,
                CharacterRole::Architect
            ]
        );
    }
}
