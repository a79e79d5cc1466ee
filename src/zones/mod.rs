//! Card zones shared by all players.
//!
//! Hands and cities live on `Player`; the draw pile is the only shared zone.

mod deck;

pub use deck::Deck;
