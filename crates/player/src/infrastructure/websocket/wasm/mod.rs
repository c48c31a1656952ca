//! WASM WebSocket implementation using web-sys

mod client;

pub use client::{replay, ReplaySession};
