//! Rules surface and scoring.
//!
//! `RulesEngine` is the driver-facing contract a `Game` implements:
//! legal actions, applying actions and the terminal check. The scoring
//! engine turns final cities into `ScoreEntry` breakdowns.

pub mod engine;
pub mod scoring;

pub use engine::{GameResult, RulesEngine};
pub use scoring::{calculate_scores, score_player, ScoreEntry};
