pub mod messaging;
pub mod surfaces;
pub mod websocket;

// Re-export messaging types
pub use messaging::{ConnectionState, ConnectionStateObserver};
