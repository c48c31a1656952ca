//! Desktop replay socket client using tokio-tungstenite

use std::sync::atomic::AtomicU8;
use std::sync::Arc;

use futures_util::StreamExt;
use tokio::sync::oneshot;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use url::Url;

use crate::application::services::SessionEventRouter;
use crate::infrastructure::messaging::{set_connection_state, ConnectionHandle, ConnectionState};
use crate::infrastructure::websocket::TransportError;
use crate::ports::outbound::RenderSurface;

/// One replay socket. Frames are handed to the router in arrival order.
pub struct ReplayClient {
    url: Url,
    state: Arc<AtomicU8>,
    disconnect_rx: oneshot::Receiver<()>,
}

impl ReplayClient {
    /// Create a client plus the handle used to stop it from outside.
    pub fn new(url: Url) -> (Self, ConnectionHandle) {
        let state = Arc::new(AtomicU8::new(ConnectionState::Disconnected.to_u8()));
        let (disconnect_tx, disconnect_rx) = oneshot::channel();
        let handle = ConnectionHandle::new(Arc::clone(&state), disconnect_tx);

        (
            Self {
                url,
                state,
                disconnect_rx,
            },
            handle,
        )
    }

    /// Connect and feed frames to `router` until the socket closes, fails,
    /// or a disconnect is requested.
    ///
    /// Returns the router (with its surface) and the terminal state. Only a
    /// failed connect is an error; a transfer error ends in
    /// [`ConnectionState::Failed`].
    pub async fn run<S: RenderSurface>(
        self,
        mut router: SessionEventRouter<S>,
    ) -> Result<(SessionEventRouter<S>, ConnectionState), TransportError> {
        let Self {
            url,
            state,
            mut disconnect_rx,
        } = self;

        set_connection_state(&state, ConnectionState::Connecting);

        let mut ws = match connect_async(url.as_str()).await {
            Ok((ws, _)) => ws,
            Err(e) => {
                tracing::error!("Failed to connect to {}: {}", url, e);
                set_connection_state(&state, ConnectionState::Failed);
                return Err(TransportError::Connect {
                    url: url.to_string(),
                    reason: e.to_string(),
                });
            }
        };

        tracing::info!("Connected to replay socket at {}", url);
        set_connection_state(&state, ConnectionState::Connected);

        let mut listen_for_disconnect = true;
        let final_state = loop {
            tokio::select! {
                requested = &mut disconnect_rx, if listen_for_disconnect => {
                    if requested.is_err() {
                        // Handle dropped without asking to disconnect
                        listen_for_disconnect = false;
                        continue;
                    }
                    tracing::info!("Disconnect requested");
                    if let Err(e) = ws.close(None).await {
                        tracing::debug!("Close handshake failed: {}", e);
                    }
                    break ConnectionState::Closed;
                }
                incoming = ws.next() => match incoming {
                    Some(Ok(Message::Text(text))) => router.handle_frame(&text),
                    Some(Ok(Message::Close(_))) | None => {
                        tracing::info!("Closed socket.");
                        break ConnectionState::Closed;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "Error during transfer.");
                        break ConnectionState::Failed;
                    }
                }
            }
        };

        set_connection_state(&state, final_state);
        Ok((router, final_state))
    }
}
