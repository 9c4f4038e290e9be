pub mod entity;
pub mod invariants;

#[cfg(test)]
pub(crate) mod fixtures;

pub use entity::{AudioResourceId, Verse};
pub use invariants::validate_verse_order;
