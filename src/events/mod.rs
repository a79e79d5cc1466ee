//! Events emitted after accepted actions.
//!
//! One variant per event kind with a typed payload; `AbilityEffect`
//! details what an ability or district power did.

mod event;

pub use event::{AbilityEffect, EventKind, GameEvent};
