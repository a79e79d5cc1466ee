//! Card catalog: districts, colors and character roles.
//!
//! - `District`: Immutable card value (name, color, cost)
//! - `DistrictCatalog`: The deck composition, lookup by name
//! - `CharacterRole`: The eight roles, their call order and income color

mod catalog;
mod character;
mod district;

pub use catalog::{
    CatalogEntry, DistrictCatalog, BASE_DECK_SIZE, DRAGON_GATE, GRAVEYARD, GREAT_WALL,
    HAUNTED_CITY, KEEP, LABORATORY, LIBRARY, OBSERVATORY, SCHOOL_OF_MAGIC, SMITHY, UNIVERSITY,
};
pub use character::CharacterRole;
pub use district::{District, DistrictColor};
