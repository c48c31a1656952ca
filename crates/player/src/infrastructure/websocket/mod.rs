//! WebSocket transport for the replay socket
//!
//! Platform-specific implementations are in submodules:
//! - `desktop`: tokio-tungstenite based client
//! - `wasm`: web-sys WebSocket based client
//! - `shared`: URL construction and transport errors

mod shared;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use shared::{replay_url, TransportError};

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::ReplayClient;

#[cfg(target_arch = "wasm32")]
pub use wasm::{replay, ReplaySession};
