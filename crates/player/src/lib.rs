//! Tenorite Player crate.
//!
//! Spectator and replay client: decodes server frames, tracks who sits in
//! which slot, and pushes field, name and special-log updates to a render
//! surface. Multi-platform support is provided via compile-time `cfg`
//! selection (tokio-tungstenite on desktop, web-sys in the browser).

pub mod application;
pub mod infrastructure;
pub mod ports;

#[cfg(not(target_arch = "wasm32"))]
pub mod runner;

// Re-export commonly used entrypoints
pub use application::services::SessionEventRouter;
pub use ports::outbound::RenderSurface;
