//! The roll-call: calling roles 1 to 8 in order.
//!
//! Calling a role runs these steps, in this order:
//! 1. announce the call
//! 2. stop if nobody drafted the role
//! 3. stop if the role was murdered (the holder is marked)
//! 4. move the holder's gold to the Thief if the role was robbed
//! 5. fire the passive ability, if any
//! 6. pay color income
//! 7. open the holder's turn
//!
//! The loop stops whenever a turn opens and resumes when it ends.

use tracing::debug;

use super::{ActiveTurn, Game};
use crate::abilities::Ability;
use crate::cards::CharacterRole;
use crate::core::{AbilityInput, GamePhase, Result};
use crate::events::GameEvent;

impl Game {
    /// The role to call next, or `None` once the Warlord has been called.
    pub(super) fn next_role(&self) -> Option<CharacterRole> {
        match self.call_pointer {
            None => Some(CharacterRole::Assassin),
            Some(role) => role.next(),
        }
    }

    /// Call roles until a turn opens or the round ends.
    pub(super) fn resume_roll_call(&mut self) -> Result<Vec<GameEvent>> {
        let mut events = Vec::new();
        self.phase = GamePhase::Resolution;
        self.turn = None;

        while let Some(role) = self.next_role() {
            self.call_role(role, &mut events)?;
            if self.turn.is_some() {
                return Ok(events);
            }
        }

        events.extend(self.end_round());
        Ok(events)
    }

    fn call_role(&mut self, role: CharacterRole, events: &mut Vec<GameEvent>) -> Result<()> {
        self.call_pointer = Some(role);
        events.push(GameEvent::CharacterCall { role });

        let Some(owner) = self.table.owner_of(role) else {
            debug!(%role, "role called, nobody holds it");
            return Ok(());
        };
        debug!(%role, %owner, round = self.round, "role called");

        if self.table.murdered() == Some(role) {
            self.table.players[owner].flags.murdered = true;
            events.push(GameEvent::Murdered {
                player: owner,
                role,
            });
            return Ok(());
        }

        if self.table.robbed() == Some(role) {
            if let Some(thief) = self.table.owner_of(CharacterRole::Thief) {
                let victim = &mut self.table.players[owner];
                let stolen = std::mem::take(&mut victim.gold);
                victim.flags.robbed = true;
                self.table.players[thief].gold += stolen;
                events.push(GameEvent::Robbed {
                    player: owner,
                    role,
                    thief,
                    stolen,
                });
            }
        }

        let ability = *self.abilities.get(role)?;
        if ability.is_passive() {
            events.extend(ability.apply(&mut self.table, owner, &AbilityInput::Trigger)?);
        }

        if let Some(color) = role.income_color() {
            let player = &mut self.table.players[owner];
            let amount = player.city_color_count(color) as u32;
            if amount > 0 {
                player.gold += amount;
                events.push(GameEvent::GoldCollected {
                    player: owner,
                    color,
                    amount,
                });
            }
        }

        self.table.players[owner].reset_turn();
        self.turn = Some(ActiveTurn {
            player: owner,
            role,
        });
        self.phase = GamePhase::PlayerTurn;
        events.push(GameEvent::PhaseChange {
            phase: GamePhase::PlayerTurn,
            player: Some(owner),
            role: Some(role),
        });
        Ok(())
    }
}
