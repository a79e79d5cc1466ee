use crate::cards::{CharacterRole, GRAVEYARD, KEEP};
use crate::core::{AbilityInput, GameError, Player, PlayerId, Result, Table};
use crate::events::{AbilityEffect, GameEvent};

use super::{Ability, AbilityTarget};

/// Role 8: destroys a district in another city for its cost minus one.
///
/// Off limits: the Warlord's own city, the city of a Bishop holder who
/// was not murdered, a completed city and the Keep. A victim who owns
/// the Graveyard and has gold gets to buy the destroyed district back;
/// otherwise it goes to the bottom of the deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Warlord;

impl Warlord {
    /// Gold the Warlord pays to destroy a district of this cost.
    #[must_use]
    pub const fn destroy_cost(cost: u32) -> u32 {
        cost.saturating_sub(1)
    }

    fn check_city(table: &Table, actor: PlayerId, target: PlayerId) -> Result<&Player> {
        if target == actor {
            return Err(GameError::InvalidTarget("cannot destroy your own district"));
        }
        let victim = table.player(target)?;
        if table.has_active_role(target, CharacterRole::Bishop) {
            return Err(GameError::InvalidTarget("city is protected by the bishop"));
        }
        if table.is_complete(victim) {
            return Err(GameError::InvalidTarget("city is already complete"));
        }
        Ok(victim)
    }
}

impl Ability for Warlord {
    fn role(&self) -> CharacterRole {
        CharacterRole::Warlord
    }

    fn needs_target(&self) -> bool {
        true
    }

    fn is_passive(&self) -> bool {
        false
    }

    fn valid_targets(&self, table: &Table, actor: PlayerId) -> Vec<AbilityTarget> {
        let Ok(me) = table.player(actor) else {
            return Vec::new();
        };
        let mut targets = Vec::new();
        for owner in table.players().player_ids() {
            let Ok(victim) = Self::check_city(table, actor, owner) else {
                continue;
            };
            for district in &victim.city {
                let cost = Self::destroy_cost(district.cost);
                if district.is(KEEP) || cost > me.gold {
                    continue;
                }
                let target = AbilityTarget::District {
                    owner,
                    name: district.name.clone(),
                    cost,
                };
                if !targets.contains(&target) {
                    targets.push(target);
                }
            }
        }
        targets
    }

    fn apply(&self, table: &mut Table, actor: PlayerId, input: &AbilityInput) -> Result<Vec<GameEvent>> {
        let AbilityInput::Destroy { target, district } = input else {
            return Err(GameError::InvalidAction("the warlord needs a district to destroy"));
        };
        let target = *target;

        let have = table.player(actor)?.gold;
        let victim = Self::check_city(table, actor, target)?;
        if district == KEEP {
            return Err(GameError::InvalidTarget("the keep cannot be destroyed"));
        }
        let Some(found) = victim.city.iter().find(|d| d.is(district)) else {
            return Err(GameError::InvalidTarget("district is not in that city"));
        };
        let need = Self::destroy_cost(found.cost);
        if need > have {
            return Err(GameError::NotEnoughGold { need, have });
        }

        table.player_mut(actor)?.gold -= need;
        let victim = table.player_mut(target)?;
        let Some(destroyed) = victim.remove_from_city(district) else {
            return Err(GameError::InvalidTarget("district is not in that city"));
        };
        let graveyard_offered = victim.city_has(GRAVEYARD) && victim.gold >= 1;

        let event = GameEvent::AbilityUsed {
            player: actor,
            effect: AbilityEffect::Destroy {
                target,
                district: destroyed.clone(),
                cost: need,
                graveyard_offered,
            },
        };
        if graveyard_offered {
            table.offer_graveyard(target, destroyed);
        } else {
            table.deck_mut().return_to_bottom([destroyed]);
        }

        Ok(vec![event])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::test_support::{give_role, table};
    use crate::cards::{District, DistrictColor};

    const WARLORD: PlayerId = PlayerId::new(0);
    const VICTIM: PlayerId = PlayerId::new(1);

    fn destroy(name: &str) -> AbilityInput {
        AbilityInput::Destroy {
            target: VICTIM,
            district: name.into(),
        }
    }

    fn setup() -> Table {
        let mut t = table(3);
        give_role(&mut t, 0, CharacterRole::Warlord);
        t.players[WARLORD].gold = 3;
        t.players[VICTIM].city = vec![
            District::new("Castle", DistrictColor::Noble, 4),
            District::new(KEEP, DistrictColor::Special, 3),
            District::new("Fortress", DistrictColor::Military, 5),
        ];
        t
    }

    fn destroy_ok(t: &mut Table, name: &str) {
        Warlord.apply(t, WARLORD, &destroy(name)).unwrap();
    }

    #[test]
    fn test_destroy_pays_cost_minus_one() {
        let mut t = setup();
        let total = t.card_count();

        destroy_ok(&mut t, "Castle");

        assert_eq!(t.players[WARLORD].gold, 0);
        assert!(!t.players[VICTIM].city_has("Castle"));
        assert_eq!(t.deck().iter().last().map(|d| d.name.as_str()), Some("Castle"));
        assert_eq!(t.card_count(), total);
    }

    #[test]
    fn test_keep_is_immune() {
        let mut t = setup();
        assert!(matches!(
            Warlord.apply(&mut t, WARLORD, &destroy(KEEP)),
            Err(GameError::InvalidTarget(_))
        ));
        assert_eq!(t.players[VICTIM].city.len(), 3);
    }

    #[test]
    fn test_not_enough_gold() {
        let mut t = setup();
        assert_eq!(
            Warlord.apply(&mut t, WARLORD, &destroy("Fortress")),
            Err(GameError::NotEnoughGold { need: 4, have: 3 })
        );
        assert_eq!(t.players[WARLORD].gold, 3);
    }

    #[test]
    fn test_bishop_protection_unless_murdered() {
        let mut t = setup();
        give_role(&mut t, 1, CharacterRole::Bishop);
        assert!(Warlord.apply(&mut t, WARLORD, &destroy("Castle")).is_err());
        assert!(Warlord.valid_targets(&t, WARLORD).is_empty());

        t.mark_murdered(CharacterRole::Bishop);
        t.players[VICTIM].flags.murdered = true;
        destroy_ok(&mut t, "Castle");
    }

    #[test]
    fn test_bishop_lost_when_other_role_murdered() {
        let mut t = setup();
        give_role(&mut t, 1, CharacterRole::King);
        give_role(&mut t, 1, CharacterRole::Bishop);
        t.mark_murdered(CharacterRole::King);
        t.players[VICTIM].flags.murdered = true;

        assert_eq!(Warlord.valid_targets(&t, WARLORD).len(), 1);
        destroy_ok(&mut t, "Castle");
        assert!(!t.players[VICTIM].city_has("Castle"));
    }

    #[test]
    fn test_completed_city_is_immune() {
        let mut t = setup();
        for i in 0..4 {
            t.players[VICTIM]
                .city
                .push(District::new(format!("Extra{}", i), DistrictColor::Trade, 1));
        }
        assert!(Warlord.apply(&mut t, WARLORD, &destroy("Castle")).is_err());
    }

    #[test]
    fn test_own_city_rejected() {
        let mut t = setup();
        t.players[WARLORD].city.push(District::new("Temple", DistrictColor::Religious, 1));
        let input = AbilityInput::Destroy {
            target: WARLORD,
            district: "Temple".into(),
        };
        assert!(Warlord.apply(&mut t, WARLORD, &input).is_err());
    }

    #[test]
    fn test_valid_targets_filter_affordable() {
        let t = setup();
        let targets = Warlord.valid_targets(&t, WARLORD);
        assert_eq!(
            targets,
            vec![AbilityTarget::District {
                owner: VICTIM,
                name: "Castle".into(),
                cost: 3
            }]
        );
    }

    #[test]
    fn test_graveyard_offer() {
        let mut t = setup();
        t.players[VICTIM].city.push(District::new(GRAVEYARD, DistrictColor::Special, 5));
        t.players[VICTIM].gold = 1;
        let total = t.card_count();

        let events = Warlord.apply(&mut t, WARLORD, &destroy("Castle")).unwrap();

        let pending = t.pending_graveyard().unwrap();
        assert_eq!(pending.player, VICTIM);
        assert_eq!(pending.district.name, "Castle");
        assert_eq!(t.card_count(), total);
        assert!(matches!(
            &events[0],
            GameEvent::AbilityUsed {
                effect: AbilityEffect::Destroy {
                    graveyard_offered: true,
                    ..
                },
                ..
            }
        ));
    }

    #[test]
    fn test_no_offer_without_gold() {
        let mut t = setup();
        t.players[VICTIM].city.push(District::new(GRAVEYARD, DistrictColor::Special, 5));
        destroy_ok(&mut t, "Castle");
        assert!(t.pending_graveyard().is_none());
    }
}
