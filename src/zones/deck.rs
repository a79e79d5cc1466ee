//! The shared district draw pile.
//!
//! Cards are drawn from the top and returned to the bottom. The pile is
//! shuffled once when it is built and never reshuffled.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cards::District;
use crate::core::GameRng;

/// Draw pile.
///
/// ```
/// use citadel_core::cards::{District, DistrictColor};
/// use citadel_core::zones::Deck;
///
/// let mut deck = Deck::from_ordered(vec![
///     District::new("A", DistrictColor::Noble, 1),
///     District::new("B", DistrictColor::Trade, 2),
/// ]);
///
/// let drawn = deck.draw(5); // short draws are not an error
/// assert_eq!(drawn.len(), 2);
/// assert!(deck.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<District>,
}

impl Deck {
    /// Build a deck from `cards` in a uniformly random order.
    pub fn shuffled(mut cards: Vec<District>, rng: &mut GameRng) -> Self {
        rng.shuffle(&mut cards);
        Self::from_ordered(cards)
    }

    /// Build a deck with `cards[0]` on top.
    #[must_use]
    pub fn from_ordered(cards: Vec<District>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Remove up to `n` cards from the top.
    ///
    /// Returns fewer than `n` if the deck runs short.
    pub fn draw(&mut self, n: usize) -> Vec<District> {
        let n = n.min(self.cards.len());
        trace!(requested = n, remaining = self.cards.len() - n, "deck draw");
        self.cards.drain(..n).collect()
    }

    /// Put cards on the bottom, in the given order.
    pub fn return_to_bottom(&mut self, cards: impl IntoIterator<Item = District>) {
        self.cards.extend(cards);
    }

    /// Look at up to `n` top cards without removing them.
    pub fn peek(&self, n: usize) -> impl Iterator<Item = &District> {
        self.cards.iter().take(n)
    }

    /// Cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over the pile, top first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &District> + ExactSizeIterator {
        self.cards.iter()
    }
}
