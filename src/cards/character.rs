//! The eight character roles.
//!
//! A role's rank (1-8) is its call order during the roll-call. Four roles
//! also collect income from districts of their color.

use serde::{Deserialize, Serialize};

use super::district::DistrictColor;

/// Character role, ranked by call order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterRole {
    Assassin = 1,
    Thief = 2,
    Magician = 3,
    King = 4,
    Bishop = 5,
    Merchant = 6,
    Architect = 7,
    Warlord = 8,
}

impl CharacterRole {
    /// All roles in call order.
    pub const ALL: [CharacterRole; 8] = [
        CharacterRole::Assassin,
        CharacterRole::Thief,
        CharacterRole::Magician,
        CharacterRole::King,
        CharacterRole::Bishop,
        CharacterRole::Merchant,
        CharacterRole::Architect,
        CharacterRole::Warlord,
    ];

    /// Number of roles.
    pub const COUNT: usize = 8;

    /// Call-order rank, 1-8.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Look up a role by rank.
    ///
    /// ```
    /// use citadel_core::cards::CharacterRole;
    ///
    /// assert_eq!(CharacterRole::from_rank(4), Some(CharacterRole::King));
    /// assert_eq!(CharacterRole::from_rank(9), None);
    /// ```
    #[must_use]
    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::ALL.get(usize::from(rank).checked_sub(1)?).copied()
    }

    /// The next role in call order, `None` after the Warlord.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_rank(self.rank() + 1)
    }

    /// Zero-based slot for fixed-size per-role tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CharacterRole::Assassin => "Assassin",
            CharacterRole::Thief => "Thief",
            CharacterRole::Magician => "Magician",
            CharacterRole::King => "King",
            CharacterRole::Bishop => "Bishop",
            CharacterRole::Merchant => "Merchant",
            CharacterRole::Architect => "Architect",
            CharacterRole::Warlord => "Warlord",
        }
    }

    /// Color of districts that pay this role income when it is called.
    #[must_use]
    pub const fn income_color(self) -> Option<DistrictColor> {
        match self {
            CharacterRole::King => Some(DistrictColor::Noble),
            CharacterRole::Bishop => Some(DistrictColor::Religious),
            CharacterRole::Merchant => Some(DistrictColor::Trade),
            CharacterRole::Warlord => Some(DistrictColor::Military),
            _ => None,
        }
    }

    /// How many districts the holder may build during this role's turn.
    #[must_use]
    pub const fn build_cap(self) -> usize {
        match self {
            CharacterRole::Architect => 3,
            _ => 1,
        }
    }
}

impl std::fmt::Display for CharacterRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_round_trip() {
        for (i, role) in CharacterRole::ALL.iter().enumerate() {
            assert_eq!(role.rank() as usize, i + 1);
            assert_eq!(role.index(), i);
            assert_eq!(CharacterRole::from_rank(role.rank()), Some(*role));
        }
        assert_eq!(CharacterRole::from_rank(0), None);
    }

    #[test]
    fn test_next_is_ascending() {
        let mut role = CharacterRole::Assassin;
        let mut seen = vec![role];
        while let Some(next) = role.next() {
            assert!(next > role);
            seen.push(next);
            role = next;
        }
        assert_eq!(seen, CharacterRole::ALL.to_vec());
    }

    #[test]
    fn test_income_colors() {
        assert_eq!(CharacterRole::King.income_color(), Some(DistrictColor::Noble));
        assert_eq!(CharacterRole::Bishop.income_color(), Some(DistrictColor::Religious));
        assert_eq!(CharacterRole::Merchant.income_color(), Some(DistrictColor::Trade));
        assert_eq!(CharacterRole::Warlord.income_color(), Some(DistrictColor::Military));
        assert_eq!(CharacterRole::Assassin.income_color(), None);
        assert_eq!(CharacterRole::Architect.income_color(), None);
    }

    #[test]
    fn test_build_cap() {
        assert_eq!(CharacterRole::Architect.build_cap(), 3);
        assert_eq!(CharacterRole::King.build_cap(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CharacterRole::Assassin), "Assassin");
        assert_eq!(format!("{}", CharacterRole::King), "King");
    }
}
