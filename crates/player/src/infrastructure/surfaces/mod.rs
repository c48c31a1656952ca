//! Render surface adapters
//!
//! - `memory`: in-process state, for tests and headless runs
//! - `console`: text renderer writing to any `io::Write`
//! - `dom`: web-sys renderer for the spectator page (WASM only)

mod console;
mod memory;

#[cfg(target_arch = "wasm32")]
mod dom;

pub use console::{ConsoleSurface, DEFAULT_FIELD_WIDTH};
pub use memory::MemorySurface;

#[cfg(target_arch = "wasm32")]
pub use dom::DomSurface;
