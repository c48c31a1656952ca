//! Tenorite Shared - wire protocol spoken by the spectator/replay socket
//!
//! Frames are newline-free text with whitespace separated tokens. Token 0 is
//! the message kind; the rest are positional fields kept as opaque strings.
//!
//! # Design Principles
//!
//! 1. **Decode once** - a frame becomes a [`ServerMessage`] at the boundary
//! 2. **Never reject unknown kinds** - they decode to [`ServerMessage::Unknown`]
//! 3. **WASM compatible** - no runtime or platform dependencies

pub mod frame;
pub mod messages;
pub mod replay;

pub use frame::tokenize;
pub use messages::{ProtocolError, ServerMessage};
pub use replay::{REPLAY_GAME_ID_PARAM, REPLAY_PATH, REPLAY_TEMPO_PARAM};
