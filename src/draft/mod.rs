//! Character draft: role partition, pick order and pick tracking.

mod state;

pub use state::{DraftLayout, DraftState};
