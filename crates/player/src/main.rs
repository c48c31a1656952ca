//! Tenorite Player - desktop replay viewer binary.
//!
//! In the browser the crate is driven through the exported `replay`
//! function instead; the wasm `main` is empty.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(not(target_arch = "wasm32"))]
use tenorite_player::runner::{self, config::RunnerConfig};

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tenorite_player=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Tenorite Player");

    let config = RunnerConfig::from_env()?;
    runner::run(config).await
}

#[cfg(target_arch = "wasm32")]
fn main() {}
