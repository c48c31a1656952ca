//! Connection lifecycle management.
//!
//! Provides connection state observation and disconnect control for the
//! replay socket. There is no reconnect: once the socket closes or fails the
//! state stays terminal.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tokio::sync::oneshot;

/// Connection state of the replay socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Not connected yet
    Disconnected,
    /// Opening the socket
    Connecting,
    /// Receiving frames
    Connected,
    /// Closed by the server or on request
    Closed,
    /// Could not connect, or the transfer failed
    Failed,
}

impl ConnectionState {
    /// Convert to u8 for atomic storage.
    pub fn to_u8(self) -> u8 {
        match self {
            ConnectionState::Disconnected => 0,
            ConnectionState::Connecting => 1,
            ConnectionState::Connected => 2,
            ConnectionState::Closed => 3,
            ConnectionState::Failed => 4,
        }
    }

    /// Convert from u8 (atomic storage).
    pub fn from_u8(v: u8) -> Self {
        match v {
            1 => ConnectionState::Connecting,
            2 => ConnectionState::Connected,
            3 => ConnectionState::Closed,
            4 => ConnectionState::Failed,
            _ => ConnectionState::Disconnected,
        }
    }

    /// Closed and Failed are final.
    pub fn is_terminal(self) -> bool {
        matches!(self, ConnectionState::Closed | ConnectionState::Failed)
    }
}

/// Handle to request a disconnect from outside the receive loop.
///
/// When this handle is dropped, it does NOT disconnect.
/// Call `disconnect()` explicitly to close the connection.
#[cfg(not(target_arch = "wasm32"))]
pub struct ConnectionHandle {
    state: Arc<AtomicU8>,
    disconnect_tx: Option<oneshot::Sender<()>>,
}

#[cfg(not(target_arch = "wasm32"))]
impl ConnectionHandle {
    pub fn new(state: Arc<AtomicU8>, disconnect_tx: oneshot::Sender<()>) -> Self {
        Self {
            state,
            disconnect_tx: Some(disconnect_tx),
        }
    }

    pub fn state(&self) -> ConnectionState {
        ConnectionState::from_u8(self.state.load(Ordering::SeqCst))
    }

    /// Ask the receive loop to close the socket.
    ///
    /// Consumes the handle: a closed replay cannot be resumed.
    pub fn disconnect(mut self) {
        if let Some(tx) = self.disconnect_tx.take() {
            let _ = tx.send(());
        }
    }

    pub fn observer(&self) -> ConnectionStateObserver {
        ConnectionStateObserver::new(Arc::clone(&self.state))
    }
}

/// Read-only view of the connection state.
#[derive(Clone)]
pub struct ConnectionStateObserver {
    state: Arc<AtomicU8>,
}

impl ConnectionStateObserver {
    pub fn new(state: Arc<AtomicU8>) -> Self {
        Self { state }
    }

    pub fn state(&self) -> ConnectionState {
        ConnectionState::from_u8(self.state.load(Ordering::SeqCst))
    }

    pub fn is_connected(&self) -> bool {
        self.state() == ConnectionState::Connected
    }
}

/// Internal helper to update connection state (used by the transports).
pub fn set_connection_state(state_ref: &AtomicU8, new_state: ConnectionState) {
    state_ref.store(new_state.to_u8(), Ordering::SeqCst);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observer_reads_state() {
        let state = Arc::new(AtomicU8::new(ConnectionState::Disconnected.to_u8()));
        let observer = ConnectionStateObserver::new(Arc::clone(&state));

        assert_eq!(observer.state(), ConnectionState::Disconnected);
        assert!(!observer.is_connected());

        set_connection_state(&state, ConnectionState::Connected);
        assert!(observer.is_connected());

        set_connection_state(&state, ConnectionState::Closed);
        assert!(observer.state().is_terminal());
    }

    #[test]
    fn test_unknown_u8_reads_as_disconnected() {
        assert_eq!(ConnectionState::from_u8(42), ConnectionState::Disconnected);
        assert_eq!(
            ConnectionState::from_u8(ConnectionState::Failed.to_u8()),
            ConnectionState::Failed
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_disconnect_signals_receiver() {
        let state = Arc::new(AtomicU8::new(ConnectionState::Connected.to_u8()));
        let (tx, mut rx) = oneshot::channel();
        let handle = ConnectionHandle::new(state, tx);

        assert_eq!(handle.state(), ConnectionState::Connected);
        handle.disconnect();
        assert_eq!(rx.try_recv(), Ok(()));
    }
}
