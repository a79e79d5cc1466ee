//! # citadel-core
//!
//! A deterministic rules engine for a 2-7 player character-drafting,
//! city-building card game.
//!
//! ## Design Principles
//!
//! 1. **Actions In, Events Out**: Players submit typed `Action`s; the
//!    engine validates them against the phase and turn owner and returns
//!    typed `GameEvent`s. A rejected action changes nothing.
//!
//! 2. **N-Player First**: Every API works for 2 to 7 players. The draft
//!    layout and pick count follow from the player count.
//!
//! 3. **Seeded Randomness**: All shuffles come from one `GameRng`. The
//!    seed is recorded, so any game can be replayed from its action
//!    history.
//!
//! ## Round Structure
//!
//! - **Draft**: roles are dealt face-down, face-up and pickable; players
//!   pick in crown order.
//! - **Roll-call**: roles are called 1 to 8. Murder, robbery, passive
//!   abilities and color income resolve at call time, then the holder
//!   takes a turn.
//! - **End**: the round in which a city reaches the completion threshold
//!   is the last one; scores are computed once it finishes.
//!
//! ## Modules
//!
//! - `core`: Players, table, actions, errors, RNG, configuration
//! - `cards`: Districts, roles and the deck catalog
//! - `zones`: The draw pile
//! - `draft`: Character draft allocation
//! - `abilities`: Role abilities behind one contract
//! - `events`: Event vocabulary
//! - `game`: The game aggregate, roll-call and turn actions
//! - `rules`: RulesEngine trait and scoring

pub mod core;
pub mod cards;
pub mod zones;
pub mod draft;
pub mod abilities;
pub mod events;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    AbilityInput, Action, ActionRecord, GameConfig, GameError, GamePhase, GameRng, GameRngState,
    GraveyardChoice, Player, PlayerId, PlayerMap, Result, Table,
};

pub use crate::cards::{CharacterRole, District, DistrictCatalog, DistrictColor};

pub use crate::zones::Deck;

pub use crate::draft::{DraftLayout, DraftState};

pub use crate::abilities::{Ability, AbilityRegistry, AbilityTarget, CharacterAbility};

pub use crate::events::{AbilityEffect, EventKind, GameEvent};

pub use crate::game::{ActiveTurn, Game, PendingDraw, PlayerView, PublicView};

pub use crate::rules::{GameResult, RulesEngine, ScoreEntry};
