//! Shared table state: players, deck and the round's markers.
//!
//! The `Table` is the part of a game that character abilities may
//! change. Abilities receive `&mut Table`, never the whole game, so they
//! can touch gold, hands, cities, the crown, the deck and the
//! murder/robbery markers, but not the phase, the roll-call or the draft.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::player::{Player, PlayerId, PlayerMap};
use crate::cards::{CharacterRole, District};
use crate::zones::Deck;

/// A destroyed district its owner may buy back through the Graveyard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraveyardPending {
    /// The Graveyard's owner, who lost the district.
    pub player: PlayerId,
    /// The destroyed district, in flight until answered.
    pub district: District,
}

/// Mutable state shared between the turn engine and abilities.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Table {
    pub(crate) players: PlayerMap<Player>,
    pub(crate) deck: Deck,
    pub(crate) murdered: Option<CharacterRole>,
    pub(crate) robbed: Option<CharacterRole>,
    pub(crate) pending_graveyard: Option<GraveyardPending>,
    pub(crate) end_city_size: usize,
}

impl Table {
    /// Seat players around a deck.
    pub fn new(players: PlayerMap<Player>, deck: Deck, end_city_size: usize) -> Self {
        Self {
            players,
            deck,
            murdered: None,
            robbed: None,
            pending_graveyard: None,
            end_city_size,
        }
    }

    /// All players in seat order.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Look up a player.
    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        self.players.get(id).ok_or(GameError::PlayerNotFound(id))
    }

    /// Look up a player mutably.
    pub fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player> {
        self.players.get_mut(id).ok_or(GameError::PlayerNotFound(id))
    }

    /// The draw pile.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The draw pile, mutably.
    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Role marked murdered this round.
    #[must_use]
    pub fn murdered(&self) -> Option<CharacterRole> {
        self.murdered
    }

    /// Role marked robbed this round.
    #[must_use]
    pub fn robbed(&self) -> Option<CharacterRole> {
        self.robbed
    }

    /// Mark a role murdered, replacing any earlier mark.
    pub fn mark_murdered(&mut self, role: CharacterRole) {
        self.murdered = Some(role);
    }

    /// Mark a role robbed, replacing any earlier mark.
    pub fn mark_robbed(&mut self, role: CharacterRole) {
        self.robbed = Some(role);
    }

    /// Offer a destroyed district back to its owner.
    pub fn offer_graveyard(&mut self, player: PlayerId, district: District) {
        self.pending_graveyard = Some(GraveyardPending { player, district });
    }

    /// The open Graveyard offer, if any.
    #[must_use]
    pub fn pending_graveyard(&self) -> Option<&GraveyardPending> {
        self.pending_graveyard.as_ref()
    }

    /// City size that completes a city.
    #[must_use]
    pub fn end_city_size(&self) -> usize {
        self.end_city_size
    }

    /// Who drafted `role` this round.
    #[must_use]
    pub fn owner_of(&self, role: CharacterRole) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, p)| p.holds(role))
            .map(|(id, _)| id)
    }

    /// Whether `player` holds `role` this round and has not been murdered.
    ///
    /// The murder mark lands on the player when the murdered role is
    /// called, so holding a second, murdered role also counts.
    #[must_use]
    pub fn has_active_role(&self, player: PlayerId, role: CharacterRole) -> bool {
        self.players
            .get(player)
            .is_some_and(|p| p.holds(role) && !p.flags.murdered)
    }

    /// Give the crown to `player`, taking it from everyone else.
    pub fn pass_crown(&mut self, player: PlayerId) {
        for (id, p) in self.players.iter_mut() {
            p.has_crown = id == player;
        }
    }

    /// Current crown holder.
    #[must_use]
    pub fn crown_holder(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, p)| p.has_crown)
            .map(|(id, _)| id)
    }

    /// Whether a city has reached the completion threshold.
    #[must_use]
    pub fn is_complete(&self, player: &Player) -> bool {
        player.city.len() >= self.end_city_size
    }

    /// Cards on the table: deck, hands, cities and any pending Graveyard card.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self
                .players
                .values()
                .map(|p| p.hand.len() + p.city.len())
                .sum::<usize>()
            + usize::from(self.pending_graveyard.is_some())
    }

    /// Clear the murder and robbery markers for a new round.
    pub(crate) fn clear_markers(&mut self) {
        self.murdered = None;
        self.robbed = None;
    }
}
