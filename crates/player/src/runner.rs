//! Desktop replay runner
//!
//! Wires config, the console surface and the replay socket together. The
//! binary is a thin shell around [`run`].

use anyhow::Result;

use crate::application::services::SessionEventRouter;
use crate::infrastructure::surfaces::ConsoleSurface;
use crate::infrastructure::websocket::{replay_url, ReplayClient};

/// Configuration types for the player runner.
pub mod config {
    use anyhow::{anyhow, Context, Result};

    use tenorite_domain::{GameId, Tempo};

    use crate::infrastructure::surfaces::DEFAULT_FIELD_WIDTH;

    pub const ENDPOINT_VAR: &str = "TENORITE_ENDPOINT";
    pub const TEMPO_VAR: &str = "TENORITE_TEMPO";
    pub const GAME_ID_VAR: &str = "TENORITE_GAME_ID";
    pub const FIELD_WIDTH_VAR: &str = "TENORITE_FIELD_WIDTH";

    const DEFAULT_ENDPOINT: &str = "ws://localhost:8080";

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct RunnerConfig {
        /// Server base URL; `/ws/replay` is appended
        pub endpoint: String,
        pub tempo: Tempo,
        pub game_id: GameId,
        /// Cells per field row on the console
        pub field_width: usize,
    }

    impl RunnerConfig {
        /// Load configuration from environment variables
        pub fn from_env() -> Result<Self> {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        /// Load configuration from any key lookup.
        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
            let endpoint = lookup(ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

            let tempo = match lookup(TEMPO_VAR) {
                Some(raw) => raw
                    .parse::<Tempo>()
                    .with_context(|| format!("{} is invalid", TEMPO_VAR))?,
                None => Tempo::default(),
            };

            let game_id = lookup(GAME_ID_VAR)
                .ok_or_else(|| anyhow!("{} environment variable is required", GAME_ID_VAR))
                .and_then(|raw| {
                    GameId::new(raw).with_context(|| format!("{} is invalid", GAME_ID_VAR))
                })?;

            let field_width = match lookup(FIELD_WIDTH_VAR) {
                Some(raw) => {
                    let width: usize = raw
                        .trim()
                        .parse()
                        .with_context(|| format!("{} must be a positive integer", FIELD_WIDTH_VAR))?;
                    if width == 0 {
                        return Err(anyhow!("{} must be a positive integer", FIELD_WIDTH_VAR));
                    }
                    width
                }
                None => DEFAULT_FIELD_WIDTH,
            };

            Ok(Self {
                endpoint,
                tempo,
                game_id,
                field_width,
            })
        }
    }

}

use config::RunnerConfig;

/// Replay one game to stdout until the socket closes or Ctrl-C.
pub async fn run(config: RunnerConfig) -> Result<()> {
    let url = replay_url(&config.endpoint, config.tempo, &config.game_id)?;
    tracing::info!(
        tempo = %config.tempo,
        game_id = %config.game_id,
        "Starting replay"
    );

    let router = SessionEventRouter::new(ConsoleSurface::stdout(config.field_width));
    let (client, handle) = ReplayClient::new(url);

    let stop = tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Interrupted, closing replay");
                handle.disconnect();
            }
            Err(e) => tracing::warn!("Failed to listen for Ctrl-C: {}", e),
        }
    });

    let result = client.run(router).await;
    stop.abort();

    let (router, state) = result?;
    tracing::info!(
        ?state,
        players = router.registry().len(),
        "Replay finished"
    );

    Ok(())
}
