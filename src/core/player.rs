//! Player identification and per-player state.
//!
//! ## PlayerId
//!
//! Seat index, 0-based, in the order players were listed at game creation.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! Gold, hand, city, the round's characters, the crown and the
//! transient per-turn flags.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use crate::cards::{CharacterRole, District, DistrictColor, SCHOOL_OF_MAGIC};

/// Player identifier (seat index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use citadel_core::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use citadel_core::core::{PlayerId, PlayerMap};
///
/// let mut gold: PlayerMap<u32> = PlayerMap::new(4, |_| 2);
/// gold[PlayerId::new(1)] += 3;
/// assert_eq!(gold[PlayerId::new(1)], 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8).map(|i| factory(PlayerId(i))).collect();
        Self { data }
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Build from values in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Check whether an ID names a seat in this map.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.data.len()
    }

    /// Get a player's data, `None` for an unknown seat.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a player's data mutably, `None` for an unknown seat.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data.iter().enumerate().map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data.iter_mut().enumerate().map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// Transient flags, scoped to one round or one turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnFlags {
    /// Killed by the Assassin this round (set when the role is called).
    pub murdered: bool,
    /// Robbed by the Thief this round.
    pub robbed: bool,
    /// Districts built this turn.
    pub built_count: usize,
    /// Took gold or drew cards this turn.
    pub took_action: bool,
    /// Used the character ability this turn.
    pub used_ability: bool,
    /// Used the Laboratory this turn.
    pub used_lab: bool,
    /// Used the Smithy this turn.
    pub used_smithy: bool,
}

/// One player's state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub gold: u32,
    pub hand: Vec<District>,
    pub city: Vec<District>,
    /// Characters for this round: 1, or 2 in 2-3 player games.
    pub characters: SmallVec<[CharacterRole; 2]>,
    pub has_crown: bool,
    pub flags: TurnFlags,
}

impl Player {
    /// Create a player with no gold, cards or characters.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            gold: 0,
            hand: Vec::new(),
            city: Vec::new(),
            characters: SmallVec::new(),
            has_crown: false,
            flags: TurnFlags::default(),
        }
    }

    /// Check if the city contains a district with this name.
    #[must_use]
    pub fn city_has(&self, name: &str) -> bool {
        self.city.iter().any(|d| d.is(name))
    }

    /// Check if the hand contains a district with this name.
    #[must_use]
    pub fn hand_has(&self, name: &str) -> bool {
        self.hand.iter().any(|d| d.is(name))
    }

    /// Check if this player drafted the role this round.
    #[must_use]
    pub fn holds(&self, role: CharacterRole) -> bool {
        self.characters.contains(&role)
    }

    /// Districts paying income for `color`.
    ///
    /// The School of Magic counts toward every non-special color.
    #[must_use]
    pub fn city_color_count(&self, color: DistrictColor) -> usize {
        let wildcard = color != DistrictColor::Special;
        self.city
            .iter()
            .map(|d| usize::from(d.color == color) + usize::from(wildcard && d.is(SCHOOL_OF_MAGIC)))
            .sum()
    }

    /// Check whether the city shows all five colors.
    ///
    /// The School of Magic is itself special, and may stand in for at most
    /// one other missing color.
    #[must_use]
    pub fn has_all_colors(&self) -> bool {
        let has_school = self.city_has(SCHOOL_OF_MAGIC);
        let missing = DistrictColor::ALL
            .iter()
            .filter(|&&c| !self.city.iter().any(|d| d.color == c))
            .count();

        match missing {
            0 => true,
            1 => has_school,
            _ => false,
        }
    }

    /// Remove the first hand card with this name.
    pub fn remove_from_hand(&mut self, name: &str) -> Option<District> {
        let idx = self.hand.iter().position(|d| d.is(name))?;
        Some(self.hand.remove(idx))
    }

    /// Remove the first city district with this name.
    pub fn remove_from_city(&mut self, name: &str) -> Option<District> {
        let idx = self.city.iter().position(|d| d.is(name))?;
        Some(self.city.remove(idx))
    }

    /// Clear characters and every transient flag for a new round.
    pub fn reset_round(&mut self) {
        self.characters.clear();
        self.flags = TurnFlags::default();
    }

    /// Clear the per-turn allowances when one of this player's roles opens a turn.
    pub fn reset_turn(&mut self) {
        self.flags = TurnFlags {
            murdered: self.flags.murdered,
            robbed: self.flags.robbed,
            ..TurnFlags::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(name: &str, color: DistrictColor, cost: u32) -> District {
        District::new(name, color, cost)
    }

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        assert_eq!(p0.index(), 0);
        assert_eq!(format!("{}", p0), "Player 0");
        assert_eq!(PlayerId::all(3).collect::<Vec<_>>().len(), 3);
    }

    #[test]
    fn test_player_map_access() {
        let mut map: PlayerMap<u32> = PlayerMap::new(3, |p| p.index() as u32 * 10);

        assert_eq!(map[PlayerId::new(2)], 20);
        assert!(map.get(PlayerId::new(3)).is_none());
        assert!(map.contains(PlayerId::new(2)));
        assert!(!map.contains(PlayerId::new(3)));

        *map.get_mut(PlayerId::new(0)).unwrap() = 7;
        assert_eq!(map[PlayerId::new(0)], 7);
        assert_eq!(map.player_count(), 3);
    }

    #[test]
    fn test_player_map_iter() {
        let map = PlayerMap::from_vec(vec!['a', 'b']);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::new(0), &'a'), (PlayerId::new(1), &'b')]);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::with_default(0);
    }

    #[test]
    fn test_color_count_with_school() {
        let mut p = Player::new(PlayerId::new(0), "Ann");
        p.city = vec![
            d("Manor", DistrictColor::Noble, 3),
            d("Castle", DistrictColor::Noble, 4),
            d(SCHOOL_OF_MAGIC, DistrictColor::Special, 6),
        ];

        assert_eq!(p.city_color_count(DistrictColor::Noble), 3);
        assert_eq!(p.city_color_count(DistrictColor::Trade), 1);
        assert_eq!(p.city_color_count(DistrictColor::Special), 1);
    }

    #[test]
    fn test_all_colors() {
        let mut p = Player::new(PlayerId::new(0), "Ann");
        p.city = vec![
            d("Manor", DistrictColor::Noble, 3),
            d("Temple", DistrictColor::Religious, 1),
            d("Tavern", DistrictColor::Trade, 1),
            d("Watchtower", DistrictColor::Military, 1),
        ];
        assert!(!p.has_all_colors());

        p.city.push(d("Keep", DistrictColor::Special, 3));
        assert!(p.has_all_colors());
    }

    #[test]
    fn test_school_fills_one_missing_color_only() {
        let mut p = Player::new(PlayerId::new(0), "Ann");
        p.city = vec![
            d("Manor", DistrictColor::Noble, 3),
            d("Temple", DistrictColor::Religious, 1),
            d("Tavern", DistrictColor::Trade, 1),
            d(SCHOOL_OF_MAGIC, DistrictColor::Special, 6),
        ];
        assert!(p.has_all_colors());

        p.city.retain(|c| !c.is("Tavern"));
        assert!(!p.has_all_colors());
    }

    #[test]
    fn test_remove_from_hand() {
        let mut p = Player::new(PlayerId::new(0), "Ann");
        p.hand = vec![d("A", DistrictColor::Noble, 1), d("B", DistrictColor::Trade, 2)];

        assert_eq!(p.remove_from_hand("B").map(|c| c.name), Some("B".to_string()));
        assert!(p.remove_from_hand("B").is_none());
        assert_eq!(p.hand.len(), 1);
    }

    #[test]
    fn test_reset_turn_keeps_round_flags() {
        let mut p = Player::new(PlayerId::new(0), "Ann");
        p.flags = TurnFlags {
            murdered: false,
            robbed: true,
            built_count: 2,
            took_action: true,
            used_ability: true,
            used_lab: true,
            used_smithy: true,
        };

        p.reset_turn();
        assert!(p.flags.robbed);
        assert_eq!(p.flags.built_count, 0);
        assert!(!p.flags.used_lab && !p.flags.used_smithy && !p.flags.took_action);

        p.characters.push(CharacterRole::King);
        p.reset_round();
        assert!(p.characters.is_empty());
        assert_eq!(p.flags, TurnFlags::default());
    }
}
