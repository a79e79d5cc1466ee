//! Core engine types: players, table state, actions, RNG, configuration.
//!
//! These are the building blocks the draft, the abilities and the turn
//! engine share.

pub mod action;
pub mod config;
pub mod error;
pub mod phase;
pub mod player;
pub mod rng;
pub mod table;

pub use action::{AbilityInput, Action, ActionRecord, GraveyardChoice};
pub use config::{GameConfig, DEFAULT_END_CITY_SIZE, DEFAULT_STARTING_GOLD, DEFAULT_STARTING_HAND};
pub use error::{GameError, Result};
pub use phase::GamePhase;
pub use player::{Player, PlayerId, PlayerMap, TurnFlags};
pub use rng::{GameRng, GameRngState};
pub use table::{GraveyardPending, Table};
