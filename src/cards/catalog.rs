//! District catalog: the deck composition.
//!
//! The `DistrictCatalog` stores every distinct district with its copy
//! count. It provides lookup by name and expands into the full card
//! multiset when a deck is built.

use rustc_hash::FxHashMap;

use super::district::{District, DistrictColor};

/// Duplicates allowed in a city.
pub const HAUNTED_CITY: &str = "Haunted City";
/// Cannot be destroyed by the Warlord.
pub const KEEP: &str = "Keep";
/// Discard a card for 1 gold once per turn.
pub const LABORATORY: &str = "Laboratory";
/// Pay 2 gold to draw 3 cards once per turn.
pub const SMITHY: &str = "Smithy";
/// Draw 3 cards instead of 2.
pub const OBSERVATORY: &str = "Observatory";
/// Reclaim a destroyed district for 1 gold.
pub const GRAVEYARD: &str = "Graveyard";
pub const GREAT_WALL: &str = "Great Wall";
/// Counts as any color for income and the color bonus.
pub const SCHOOL_OF_MAGIC: &str = "School of Magic";
/// Keep every drawn card.
pub const LIBRARY: &str = "Library";
pub const UNIVERSITY: &str = "University";
pub const DRAGON_GATE: &str = "Dragon Gate";

/// Number of cards in the base deck.
pub const BASE_DECK_SIZE: usize = 62;

/// One distinct district and how many copies the deck holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub district: District,
    pub count: usize,
}

/// Catalog of district cards.
///
/// ## Example
///
/// ```
/// use citadel_core::cards::{DistrictCatalog, District, DistrictColor};
///
/// let mut catalog = DistrictCatalog::new();
/// catalog.register(District::new("Tavern", DistrictColor::Trade, 1), 5);
///
/// assert_eq!(catalog.get("Tavern").unwrap().cost, 1);
/// assert_eq!(catalog.len(), 5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DistrictCatalog {
    entries: Vec<CatalogEntry>,
    by_name: FxHashMap<String, usize>,
}

impl DistrictCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The base 62-card composition.
    #[must_use]
    pub fn base() -> Self {
        use DistrictColor::{Military, Noble, Religious, Special, Trade};

        let mut catalog = Self::new();
        let mut add = |count: usize, name: &str, color: DistrictColor, cost: u32| {
            catalog.register(District::new(name, color, cost), count);
        };

        add(5, "Manor", Noble, 3);
        add(4, "Castle", Noble, 4);
        add(3, "Palace", Noble, 5);

        add(3, "Temple", Religious, 1);
        add(3, "Church", Religious, 2);
        add(3, "Monastery", Religious, 3);
        add(2, "Cathedral", Religious, 5);

        add(5, "Tavern", Trade, 1);
        add(3, "Trading Post", Trade, 2);
        add(3, "Market", Trade, 2);
        add(3, "Docks", Trade, 3);
        add(2, "Harbor", Trade, 4);
        add(1, "Town Hall", Trade, 5);

        add(3, "Watchtower", Military, 1);
        add(3, "Prison", Military, 2);
        add(3, "Battlefield", Military, 3);
        add(2, "Fortress", Military, 5);

        add(1, HAUNTED_CITY, Special, 2);
        add(1, KEEP, Special, 3);
        add(1, LABORATORY, Special, 5);
        add(1, SMITHY, Special, 5);
        add(1, OBSERVATORY, Special, 5);
        add(1, GRAVEYARD, Special, 5);
        add(1, GREAT_WALL, Special, 6);
        add(1, SCHOOL_OF_MAGIC, Special, 6);
        add(1, LIBRARY, Special, 6);
        add(1, UNIVERSITY, Special, 6);
        add(1, DRAGON_GATE, Special, 6);

        catalog
    }

    /// Register a district with its copy count.
    ///
    /// Panics if a district with the same name already exists.
    pub fn register(&mut self, district: District, count: usize) {
        if self.by_name.contains_key(&district.name) {
            panic!("District {:?} already registered", district.name);
        }
        self.by_name.insert(district.name.clone(), self.entries.len());
        self.entries.push(CatalogEntry { district, count });
    }

    /// Get a district definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&District> {
        self.by_name.get(name).map(|&i| &self.entries[i].district)
    }

    /// Copies of a district in the deck; 0 if unknown.
    #[must_use]
    pub fn count_of(&self, name: &str) -> usize {
        self.by_name.get(name).map_or(0, |&i| self.entries[i].count)
    }

    /// Check if a district name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Total number of cards (sum of copy counts).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Check if the catalog holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of distinct districts.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Expand into the full card multiset, unshuffled.
    #[must_use]
    pub fn instances(&self) -> Vec<District> {
        self.entries
            .iter()
            .flat_map(|e| std::iter::repeat(e.district.clone()).take(e.count))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_has_62_cards() {
        let catalog = DistrictCatalog::base();
        assert_eq!(catalog.len(), BASE_DECK_SIZE);
        assert_eq!(catalog.instances().len(), BASE_DECK_SIZE);
    }

    #[test]
    fn test_base_color_counts() {
        let cards = DistrictCatalog::base().instances();
        let count = |c: DistrictColor| cards.iter().filter(|d| d.color == c).count();

        assert_eq!(count(DistrictColor::Noble), 12);
        assert_eq!(count(DistrictColor::Religious), 11);
        assert_eq!(count(DistrictColor::Trade), 17);
        assert_eq!(count(DistrictColor::Military), 11);
        assert_eq!(count(DistrictColor::Special), 11);
    }

    #[test]
    fn test_lookup() {
        let catalog = DistrictCatalog::base();

        let keep = catalog.get(KEEP).unwrap();
        assert_eq!(keep.color, DistrictColor::Special);
        assert_eq!(keep.cost, 3);
        assert_eq!(catalog.count_of("Manor"), 5);
        assert_eq!(catalog.count_of("Nowhere"), 0);
        assert!(catalog.get("Nowhere").is_none());
    }

    #[test]
    fn test_special_districts_unique() {
        let catalog = DistrictCatalog::base();
        for name in [
            HAUNTED_CITY, KEEP, LABORATORY, SMITHY, OBSERVATORY, GRAVEYARD,
            GREAT_WALL, SCHOOL_OF_MAGIC, LIBRARY, UNIVERSITY, DRAGON_GATE,
        ] {
            assert_eq!(catalog.count_of(name), 1, "{}", name);
        }
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_name_panics() {
        let mut catalog = DistrictCatalog::new();
        catalog.register(District::new("Temple", DistrictColor::Religious, 1), 3);
        catalog.register(District::new("Temple", DistrictColor::Religious, 2), 1);
    }

    #[test]
    fn test_instances_preserve_registration_order() {
        let mut catalog = DistrictCatalog::new();
        catalog.register(District::new("A", DistrictColor::Noble, 1), 2);
        catalog.register(District::new("B", DistrictColor::Trade, 2), 1);

        let names: Vec<_> = catalog.instances().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["A", "A", "B"]);
        assert_eq!(catalog.distinct(), 2);
    }
}
