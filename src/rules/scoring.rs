//! End-of-game scoring.
//!
//! Each player is scored independently from their final city:
//! - district costs
//! - +3 for all five colors (School of Magic may fill one gap)
//! - +4 for the first completed city, +2 for every other completed city
//! - +2 each for the University and the Dragon Gate

use serde::{Deserialize, Serialize};

use crate::cards::{DRAGON_GATE, UNIVERSITY};
use crate::core::{Player, PlayerId, PlayerMap};

pub const COLOR_BONUS: u32 = 3;
pub const FIRST_COMPLETE_BONUS: u32 = 4;
pub const OTHER_COMPLETE_BONUS: u32 = 2;
pub const SPECIAL_BONUS: u32 = 2;

/// One player's score breakdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub player: PlayerId,
    pub name: String,
    pub district_score: u32,
    pub color_bonus: u32,
    pub first_complete: u32,
    pub other_complete: u32,
    pub special_bonus: u32,
    pub total: u32,
}

/// Score a single player.
#[must_use]
pub fn score_player(player: &Player, first_to_complete: Option<PlayerId>, end_city_size: usize) -> ScoreEntry {
    let district_score = player.city.iter().map(|d| d.cost).sum();
    let color_bonus = if player.has_all_colors() { COLOR_BONUS } else { 0 };

    let (first_complete, other_complete) = if first_to_complete == Some(player.id) {
        (FIRST_COMPLETE_BONUS, 0)
    } else if player.city.len() >= end_city_size {
        (0, OTHER_COMPLETE_BONUS)
    } else {
        (0, 0)
    };

    let special_bonus = player
        .city
        .iter()
        .filter(|d| d.is(UNIVERSITY) || d.is(DRAGON_GATE))
        .count() as u32
        * SPECIAL_BONUS;

    ScoreEntry {
        player: player.id,
        name: player.name.clone(),
        district_score,
        color_bonus,
        first_complete,
        other_complete,
        special_bonus,
        total: district_score + color_bonus + first_complete + other_complete + special_bonus,
    }
}

/// Score every player in seat order.
#[must_use]
pub fn calculate_scores(
    players: &PlayerMap<Player>,
    first_to_complete: Option<PlayerId>,
    end_city_size: usize,
) -> Vec<ScoreEntry> {
    players
        .values()
        .map(|p| score_player(p, first_to_complete, end_city_size))
        .collect()
}
