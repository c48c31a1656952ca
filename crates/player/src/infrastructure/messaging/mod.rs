//! Connection lifecycle types shared by the desktop and WASM transports.

pub mod connection;

#[cfg(not(target_arch = "wasm32"))]
pub use connection::ConnectionHandle;
pub use connection::{set_connection_state, ConnectionState, ConnectionStateObserver};
