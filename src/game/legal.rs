//! Legal action enumeration and the terminal check.

use smallvec::SmallVec;

use super::Game;
use crate::abilities::{Ability, AbilityTarget};
use crate::cards::{CharacterRole, HAUNTED_CITY, LABORATORY, SMITHY};
use crate::core::{AbilityInput, Action, GamePhase, GraveyardChoice, PlayerId, Result};
use crate::events::GameEvent;
use crate::rules::{GameResult, RulesEngine};

impl Game {
    fn ability_actions(&self, player: PlayerId, role: CharacterRole) -> Vec<Action> {
        let Ok(ability) = self.abilities.get(role) else {
            return Vec::new();
        };
        if ability.is_passive() {
            return Vec::new();
        }

        ability
            .valid_targets(&self.table, player)
            .into_iter()
            .filter_map(|target| {
                let input = match (role, target) {
                    (CharacterRole::Assassin, AbilityTarget::Role { role }) => AbilityInput::Assassinate { role },
                    (CharacterRole::Thief, AbilityTarget::Role { role }) => AbilityInput::Rob { role },
                    (CharacterRole::Magician, AbilityTarget::Player { player }) => {
                        AbilityInput::SwapHands { target: player }
                    }
                    (CharacterRole::Magician, AbilityTarget::OwnHand { size }) => AbilityInput::DiscardDraw {
                        indices: (0..size).collect::<SmallVec<_>>(),
                    },
                    (CharacterRole::Warlord, AbilityTarget::District { owner, name, .. }) => {
                        AbilityInput::Destroy {
                            target: owner,
                            district: name,
                        }
                    }
                    _ => return None,
                };
                Some(Action::Ability { input })
            })
            .collect()
    }

    fn turn_actions(&self, player: PlayerId) -> Vec<Action> {
        let Some(turn) = self.turn.filter(|t| t.player == player) else {
            return Vec::new();
        };
        let Ok(me) = self.table.player(player) else {
            return Vec::new();
        };
        let mut actions = Vec::new();

        if !me.flags.took_action {
            actions.push(Action::TakeGold);
            actions.push(Action::DrawCards);
        }

        if me.flags.built_count < turn.role.build_cap() {
            let mut seen: Vec<&str> = Vec::new();
            for card in &me.hand {
                if seen.contains(&card.name.as_str()) {
                    continue;
                }
                seen.push(&card.name);
                let duplicate = !card.is(HAUNTED_CITY) && me.city_has(&card.name);
                if card.cost <= me.gold && !duplicate {
                    actions.push(Action::Build {
                        district: card.name.clone(),
                    });
                }
            }
        }

        if !me.flags.used_ability {
            actions.extend(self.ability_actions(player, turn.role));
        }

        if me.city_has(LABORATORY) && !me.flags.used_lab {
            let mut seen: Vec<&str> = Vec::new();
            for card in &me.hand {
                if !seen.contains(&card.name.as_str()) {
                    seen.push(&card.name);
                    actions.push(Action::LabDiscard {
                        district: card.name.clone(),
                    });
                }
            }
        }

        if me.city_has(SMITHY) && !me.flags.used_smithy && me.gold >= 2 {
            actions.push(Action::SmithyDraw);
        }

        actions.push(Action::EndTurn);
        actions
    }
}

impl RulesEngine for Game {
    fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        let mut actions = Vec::new();

        if self.table.pending_graveyard().is_some_and(|g| g.player == player) {
            if self.table.players[player].gold >= 1 {
                actions.push(Action::GraveyardRespond {
                    choice: GraveyardChoice::Accept,
                });
            }
            actions.push(Action::GraveyardRespond {
                choice: GraveyardChoice::Decline,
            });
        }

        match self.phase {
            GamePhase::DraftPick => {
                if let Some(draft) = self.draft.as_ref().filter(|d| d.current_picker() == Some(player)) {
                    actions.extend(
                        draft
                            .available()
                            .iter()
                            .map(|&role| Action::DraftPick { role }),
                    );
                }
            }
            GamePhase::DrawChoice => {
                if let Some(pending) = self.draw_choice.as_ref() {
                    if self.turn.is_some_and(|t| t.player == player) {
                        actions.extend((0..pending.cards.len()).map(|index| Action::KeepCard { index }));
                    }
                }
            }
            GamePhase::PlayerTurn => actions.extend(self.turn_actions(player)),
            _ => {}
        }

        actions
    }

    fn apply_action(&mut self, player: PlayerId, action: &Action) -> Result<Vec<GameEvent>> {
        self.apply(player, action)
    }

    fn is_terminal(&self) -> Option<GameResult> {
        if !self.is_over() {
            return None;
        }
        let best = self.scores.iter().map(|s| s.total).max()?;
        let winners: Vec<PlayerId> = self
            .scores
            .iter()
            .filter(|s| s.total == best)
            .map(|s| s.player)
            .collect();

        match winners.as_slice() {
            [only] => Some(GameResult::Winner(*only)),
            _ => Some(GameResult::Winners(winners)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::core::GameConfig;

    #[test]
    fn test_draft_actions_only_for_picker() {
        let mut game = Game::new(["A", "B"], GameConfig::default().with_seed(5)).unwrap();
        game.start().unwrap();

        let picker = game.draft().unwrap().current_picker().unwrap();
        assert_eq!(game.legal_actions(picker).len(), 7);
        let other = PlayerId::new(1 - picker.0);
        assert!(game.legal_actions(other).is_empty());
    }

    #[test]
    fn test_turn_actions() {
        let mut game = game_with_roles(&[CharacterRole::Thief, CharacterRole::Warlord]);
        begin_roll_call(&mut game);
        let me = PlayerId::new(0);

        let actions = game.legal_actions(me);
        assert!(actions.contains(&Action::TakeGold));
        assert!(actions.contains(&Action::EndTurn));
        assert!(actions.contains(&Action::Ability {
            input: AbilityInput::Rob {
                role: CharacterRole::Warlord
            }
        }));
        assert!(game.legal_actions(PlayerId::new(1)).is_empty());

        for action in &actions {
            let mut probe = game.clone();
            assert!(probe.apply_action(me, action).is_ok(), "{:?} was rejected", action);
        }
    }

    #[test]
    fn test_terminal_only_when_over() {
        let mut game = game_with_roles(&[CharacterRole::Assassin, CharacterRole::Warlord]);
        assert!(game.is_terminal().is_none());

        set_call_pointer(&mut game, Some(CharacterRole::Warlord));
        table_mut(&mut game).players[PlayerId::new(1)].city = (0..7)
            .map(|i| crate::cards::District::new(format!("D{}", i), crate::cards::DistrictColor::Trade, 2))
            .collect();
        begin_roll_call(&mut game);

        assert_eq!(game.is_terminal(), Some(GameResult::Winner(PlayerId::new(1))));
    }
}
