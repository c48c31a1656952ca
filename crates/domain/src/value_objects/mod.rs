//! Value objects - Immutable objects defined by their attributes

mod field;
mod names;
mod special;
mod tempo;

pub use field::{Field, Tile, SPECIAL_TILE_CLASS};
pub use names::PlayerName;
pub use special::{SpecialAction, SpecialCategory};
pub use tempo::Tempo;
