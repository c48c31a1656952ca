//! Browser replay socket using web-sys
//!
//! `replay(tempo, id)` is the page entry point: it opens the replay socket
//! against the page origin and renders into the spectator markup.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MessageEvent, WebSocket};

use tenorite_domain::{GameId, Tempo};

use crate::application::services::SessionEventRouter;
use crate::infrastructure::messaging::ConnectionState;
use crate::infrastructure::surfaces::DomSurface;
use crate::infrastructure::websocket::{replay_url, TransportError};

/// Socket callbacks, kept alive for as long as the session is.
struct SocketClosures {
    _onmessage: Closure<dyn FnMut(MessageEvent)>,
    _onopen: Closure<dyn FnMut()>,
    _onclose: Closure<dyn FnMut()>,
    _onerror: Closure<dyn FnMut()>,
}

/// A running replay. Dropping it (or calling `close`) ends the replay.
#[wasm_bindgen]
pub struct ReplaySession {
    socket: WebSocket,
    state: Rc<Cell<ConnectionState>>,
    _closures: SocketClosures,
}

#[wasm_bindgen]
impl ReplaySession {
    pub fn close(&self) -> Result<(), JsValue> {
        self.socket.close()?;
        self.state.set(ConnectionState::Closed);
        Ok(())
    }

    /// Current state name, for page scripts.
    pub fn state(&self) -> String {
        format!("{:?}", self.state.get())
    }
}

impl Drop for ReplaySession {
    fn drop(&mut self) {
        self.socket.set_onmessage(None);
        self.socket.set_onopen(None);
        self.socket.set_onclose(None);
        self.socket.set_onerror(None);
        let _ = self.socket.close();
    }
}

impl From<TransportError> for JsValue {
    fn from(e: TransportError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

/// Start replaying game `id` at `tempo` (`normal` or `fast`).
#[wasm_bindgen]
pub fn replay(tempo: &str, id: &str) -> Result<ReplaySession, JsValue> {
    console_error_panic_hook::set_once();
    let _ = tracing_wasm::try_set_as_global_default();

    let tempo: Tempo = tempo
        .parse()
        .map_err(|e: tenorite_domain::DomainError| JsValue::from_str(&e.to_string()))?;
    let game_id = GameId::new(id).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let origin = window.location().origin()?;
    let url = replay_url(&origin, tempo, &game_id)?;

    let surface = DomSurface::from_window().ok_or_else(|| JsValue::from_str("No document"))?;
    let router = Rc::new(RefCell::new(SessionEventRouter::new(surface)));
    let state = Rc::new(Cell::new(ConnectionState::Connecting));

    let socket = WebSocket::new(url.as_str())
        .map_err(|e| TransportError::Socket(format!("{:?}", e)))?;

    let onmessage = {
        let router = Rc::clone(&router);
        Closure::<dyn FnMut(_)>::new(move |e: MessageEvent| {
            if let Ok(text) = e.data().dyn_into::<js_sys::JsString>() {
                let frame: String = text.into();
                router.borrow_mut().handle_frame(&frame);
            }
        })
    };
    socket.set_onmessage(Some(onmessage.as_ref().unchecked_ref()));

    let onopen = {
        let state = Rc::clone(&state);
        let url = url.to_string();
        Closure::<dyn FnMut()>::new(move || {
            state.set(ConnectionState::Connected);
            tracing::info!("Connected to replay socket at {}", url);
        })
    };
    socket.set_onopen(Some(onopen.as_ref().unchecked_ref()));

    let onclose = {
        let state = Rc::clone(&state);
        Closure::<dyn FnMut()>::new(move || {
            if state.get() != ConnectionState::Failed {
                state.set(ConnectionState::Closed);
            }
            tracing::info!("Closed socket.");
        })
    };
    socket.set_onclose(Some(onclose.as_ref().unchecked_ref()));

    let onerror = {
        let state = Rc::clone(&state);
        Closure::<dyn FnMut()>::new(move || {
            state.set(ConnectionState::Failed);
            tracing::warn!("Error during transfer.");
        })
    };
    socket.set_onerror(Some(onerror.as_ref().unchecked_ref()));

    Ok(ReplaySession {
        socket,
        state,
        _closures: SocketClosures {
            _onmessage: onmessage,
            _onopen: onopen,
            _onclose: onclose,
            _onerror: onerror,
        },
    })
}
