//! Game configuration.
//!
//! A `GameConfig` is supplied at game construction:
//! - the district catalog (deck composition)
//! - the city size that triggers the final round
//! - starting gold and hand size
//! - an optional RNG seed for deterministic replay

use crate::cards::DistrictCatalog;

use super::error::{GameError, Result};

/// City size that triggers the final round.
pub const DEFAULT_END_CITY_SIZE: usize = 7;
/// Gold each player starts with.
pub const DEFAULT_STARTING_GOLD: u32 = 2;
/// Cards each player starts with.
pub const DEFAULT_STARTING_HAND: usize = 4;

/// Complete game configuration.
///
/// ```
/// use citadel_core::core::GameConfig;
///
/// let config = GameConfig::default().with_end_city_size(8).with_seed(7);
/// assert_eq!(config.end_city_size, 8);
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.catalog.len(), 62);
/// ```
#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Deck composition.
    pub catalog: DistrictCatalog,

    /// Completion threshold: districts in a city that end the game.
    pub end_city_size: usize,

    /// Gold dealt to each player at start.
    pub starting_gold: u32,

    /// Cards dealt to each player at start.
    pub starting_hand_size: usize,

    /// Seed for shuffles. `None` picks a random seed.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            catalog: DistrictCatalog::base(),
            end_city_size: DEFAULT_END_CITY_SIZE,
            starting_gold: DEFAULT_STARTING_GOLD,
            starting_hand_size: DEFAULT_STARTING_HAND,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the district catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: DistrictCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Set the completion threshold.
    #[must_use]
    pub fn with_end_city_size(mut self, size: usize) -> Self {
        self.end_city_size = size;
        self
    }

    /// Set starting gold.
    #[must_use]
    pub fn with_starting_gold(mut self, gold: u32) -> Self {
        self.starting_gold = gold;
        self
    }

    /// Set starting hand size.
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration can run a game.
    pub fn validate(&self) -> Result<()> {
        if self.end_city_size == 0 {
            return Err(GameError::InvalidConfig("end city size must be at least 1"));
        }
        if self.catalog.is_empty() {
            return Err(GameError::InvalidConfig("district catalog is empty"));
        }
        Ok(())
    }
}
