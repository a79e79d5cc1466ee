//! District cards - immutable card values.
//!
//! A `District` is a plain value: name, color and cost. The deck holds
//! several instances of most districts, and card identity is by name
//! rather than per-instance. Hands and cities are therefore ordered
//! `Vec<District>` sequences with remove-by-name semantics.

use serde::{Deserialize, Serialize};

/// The five district colors.
///
/// The first four map onto a character role for color income;
/// `Special` (purple) districts carry their own rules instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistrictColor {
    /// Yellow. Income for the King.
    Noble,
    /// Blue. Income for the Bishop.
    Religious,
    /// Green. Income for the Merchant.
    Trade,
    /// Red. Income for the Warlord.
    Military,
    /// Purple. No income role.
    Special,
}

impl DistrictColor {
    /// All colors, in catalog order.
    pub const ALL: [DistrictColor; 5] = [
        DistrictColor::Noble,
        DistrictColor::Religious,
        DistrictColor::Trade,
        DistrictColor::Military,
        DistrictColor::Special,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DistrictColor::Noble => "Noble",
            DistrictColor::Religious => "Religious",
            DistrictColor::Trade => "Trade",
            DistrictColor::Military => "Military",
            DistrictColor::Special => "Special",
        }
    }
}

impl std::fmt::Display for DistrictColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A district card.
///
/// ```
/// use citadel_core::cards::{District, DistrictColor};
///
/// let manor = District::new("Manor", DistrictColor::Noble, 3);
/// assert!(manor.is("Manor"));
/// assert_eq!(manor.cost, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct District {
    /// Card name; the identity of the card.
    pub name: String,
    /// District color.
    pub color: DistrictColor,
    /// Gold cost to build, also its score value.
    pub cost: u32,
}

impl District {
    /// Create a district value.
    pub fn new(name: impl Into<String>, color: DistrictColor, cost: u32) -> Self {
        Self {
            name: name.into(),
            color,
            cost,
        }
    }

    /// Check the card's name.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }
}

impl std::fmt::Display for District {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.color, self.cost)
    }
}
