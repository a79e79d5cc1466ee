//! Character draft allocation.
//!
//! Each round the eight roles are shuffled and split three ways:
//! - face-down: removed from play, seen by nobody
//! - face-up: visible to all, not pickable
//! - available: the pickable pool
//!
//! Players then pick in crown order. In 2-3 player games everyone picks
//! twice, in full round-robin passes.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CharacterRole;
use crate::core::{GameError, GameRng, PlayerId, PlayerMap, Result};

/// How the eight roles are split for a player count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftLayout {
    /// Hidden roles removed from play.
    pub face_down: usize,
    /// Visible roles removed from play.
    pub face_up: usize,
    /// Characters each player drafts.
    pub picks_per_player: usize,
}

impl DraftLayout {
    /// The layout for `player_count` players.
    ///
    /// ```
    /// use citadel_core::draft::DraftLayout;
    ///
    /// let four = DraftLayout::for_players(4);
    /// assert_eq!((four.face_down, four.face_up, four.picks_per_player), (1, 2, 1));
    /// assert_eq!(four.pickable(), 5);
    /// ```
    #[must_use]
    pub const fn for_players(player_count: usize) -> Self {
        let (face_down, face_up, picks_per_player) = match player_count {
            2 | 3 => (1, 0, 2),
            4 => (1, 2, 1),
            5 => (1, 1, 1),
            _ => (1, 0, 1),
        };
        Self {
            face_down,
            face_up,
            picks_per_player,
        }
    }

    /// Size of the pickable pool.
    #[must_use]
    pub const fn pickable(&self) -> usize {
        CharacterRole::COUNT - self.face_down - self.face_up
    }
}

/// One round's draft.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DraftState {
    layout: DraftLayout,
    available: Vec<CharacterRole>,
    face_up: Vec<CharacterRole>,
    face_down: Vec<CharacterRole>,
    pick_order: Vec<PlayerId>,
    picks: PlayerMap<SmallVec<[CharacterRole; 2]>>,
    current: usize,
}

impl DraftState {
    /// Deal out the roles and fix the pick order.
    ///
    /// `crown` picks first, then the others in seat order.
    pub fn setup(player_count: usize, crown: PlayerId, rng: &mut GameRng) -> Self {
        let layout = DraftLayout::for_players(player_count);

        let mut roles = CharacterRole::ALL.to_vec();
        rng.shuffle(&mut roles);

        let available = roles.split_off(layout.face_down + layout.face_up);
        let face_up = roles.split_off(layout.face_down);
        let face_down = roles;

        let seats: Vec<PlayerId> = (0..player_count)
            .map(|i| PlayerId::new(((crown.index() + i) % player_count) as u8))
            .collect();
        let pick_order = seats
            .iter()
            .copied()
            .cycle()
            .take(player_count * layout.picks_per_player)
            .collect();

        Self {
            layout,
            available,
            face_up,
            face_down,
            pick_order,
            picks: PlayerMap::with_default(player_count),
            current: 0,
        }
    }

    /// The layout this draft was dealt with.
    #[must_use]
    pub fn layout(&self) -> DraftLayout {
        self.layout
    }

    /// Roles still pickable.
    #[must_use]
    pub fn available(&self) -> &[CharacterRole] {
        &self.available
    }

    /// Visible, unpickable roles.
    #[must_use]
    pub fn face_up(&self) -> &[CharacterRole] {
        &self.face_up
    }

    /// Hidden, unpickable roles.
    #[must_use]
    pub fn face_down(&self) -> &[CharacterRole] {
        &self.face_down
    }

    /// Full pick sequence, crown holder first.
    #[must_use]
    pub fn pick_order(&self) -> &[PlayerId] {
        &self.pick_order
    }

    /// Who picks next; `None` once the draft is done.
    #[must_use]
    pub fn current_picker(&self) -> Option<PlayerId> {
        self.pick_order.get(self.current).copied()
    }

    /// Picks made so far.
    #[must_use]
    pub fn picks_made(&self) -> usize {
        self.current
    }

    /// Picks made by one player.
    #[must_use]
    pub fn picks_for(&self, player: PlayerId) -> &[CharacterRole] {
        self.picks.get(player).map(|p| p.as_slice()).unwrap_or(&[])
    }

    /// Record `player` taking `role`.
    pub fn pick(&mut self, player: PlayerId, role: CharacterRole) -> Result<()> {
        if self.current_picker() != Some(player) {
            return Err(GameError::NotYourTurn);
        }
        let idx = self
            .available
            .iter()
            .position(|&r| r == role)
            .ok_or(GameError::InvalidAction("character is not available"))?;

        self.available.remove(idx);
        self.picks[player].push(role);
        self.current += 1;
        Ok(())
    }

    /// All picks made.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.current >= self.pick_order.len()
    }

    /// Hand over each player's picks at the end of the draft.
    pub(crate) fn take_picks(&mut self) -> PlayerMap<SmallVec<[CharacterRole; 2]>> {
        let count = self.picks.player_count();
        std::mem::replace(&mut self.picks, PlayerMap::with_default(count))
    }
}
