//! Tenorite Domain - value objects shared by the wire protocol and the player.
//!
//! Nothing in here knows about sockets or render targets. Types are small,
//! cheap to clone and serializable so they can flow through structured logs.

pub mod error;
pub mod ids;
pub mod value_objects;

pub use error::DomainError;
pub use ids::{GameId, SlotId};
pub use value_objects::{
    Field, PlayerName, SpecialAction, SpecialCategory, Tempo, Tile, SPECIAL_TILE_CLASS,
};
