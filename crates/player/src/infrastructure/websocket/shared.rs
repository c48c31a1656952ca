//! Shared helpers for the platform-specific WebSocket clients.
//!
//! This module is runtime-agnostic (no tokio, no web-sys) so it can be used
//! by both the desktop and WASM implementations.

use thiserror::Error;
use url::Url;

use tenorite_domain::{GameId, Tempo};
use tenorite_shared::{REPLAY_GAME_ID_PARAM, REPLAY_PATH, REPLAY_TEMPO_PARAM};

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Failed to connect to {url}: {reason}")]
    Connect { url: String, reason: String },

    #[error("WebSocket error: {0}")]
    Socket(String),
}

impl TransportError {
    fn invalid_endpoint(endpoint: &str, reason: impl Into<String>) -> Self {
        Self::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: reason.into(),
        }
    }
}

/// Build the replay socket URL for a recorded game.
///
/// `endpoint` is the server base (`ws://host:port`, or an `http(s)` page
/// origin which is mapped to `ws(s)`). Any path on the endpoint is kept as
/// a prefix; query and fragment are replaced.
pub fn replay_url(endpoint: &str, tempo: Tempo, game_id: &GameId) -> Result<Url, TransportError> {
    let mut url =
        Url::parse(endpoint).map_err(|e| TransportError::invalid_endpoint(endpoint, e.to_string()))?;

    let scheme = match url.scheme() {
        "ws" | "http" => "ws",
        "wss" | "https" => "wss",
        other => {
            return Err(TransportError::invalid_endpoint(
                endpoint,
                format!("unsupported scheme '{}'", other),
            ))
        }
    };
    url.set_scheme(scheme)
        .map_err(|_| TransportError::invalid_endpoint(endpoint, "cannot switch scheme"))?;

    let path = format!("{}{}", url.path().trim_end_matches('/'), REPLAY_PATH);
    url.set_path(&path);
    url.set_fragment(None);
    url.query_pairs_mut()
        .clear()
        .append_pair(REPLAY_TEMPO_PARAM, tempo.as_str())
        .append_pair(REPLAY_GAME_ID_PARAM, game_id.as_str());

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: &str) -> GameId {
        GameId::new(id).expect("valid game id")
    }

    #[test]
    fn test_replay_url_from_ws_endpoint() {
        let url = replay_url("ws://localhost:8080", Tempo::Normal, &game("abc123")).expect("url");
        assert_eq!(
            url.as_str(),
            "ws://localhost:8080/ws/replay?tempo=normal&id=abc123"
        );
    }

    #[test]
    fn test_replay_url_maps_http_and_keeps_prefix() {
        let url = replay_url(
            "https://tetrinet.example.org/tenorite/?x=1#top",
            Tempo::Fast,
            &game("g 1"),
        )
        .expect("url");
        assert_eq!(
            url.as_str(),
            "wss://tetrinet.example.org/tenorite/ws/replay?tempo=fast&id=g+1"
        );
    }

    #[test]
    fn test_replay_url_rejects_bad_endpoints() {
        assert!(matches!(
            replay_url("not a url", Tempo::Normal, &game("a")),
            Err(TransportError::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            replay_url("ftp://host", Tempo::Normal, &game("a")),
            Err(TransportError::InvalidEndpoint { .. })
        ));
    }
}
