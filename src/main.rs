//! Gridsnake Server
//!
//! Authoritative backend for the grid snake game.
//! `serve` (the default) runs the HTTP server; `drive <url>` runs the
//! headless sync client against an already running server.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gridsnake::client::{run_client, GameApi};
use gridsnake::core::grid::Heading;
use gridsnake::network::server::{serve, ServerConfig};
use gridsnake::VERSION;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Gridsnake Server v{}", VERSION);

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("drive") => {
            let url = args
                .next()
                .unwrap_or_else(|| "http://127.0.0.1:5003".to_owned());
            drive(url).await
        }
        Some("serve") | None => {
            let config = ServerConfig {
                rng_seed: clock_seed(),
                ..Default::default()
            };
            serve(config).await?;
            Ok(())
        }
        Some(other) => anyhow::bail!("unknown command: {other} (expected serve|drive)"),
    }
}

/// Seed material from the wall clock. Fix it by hand when a run must be
/// reproducible.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}

/// Demo driver: reset the session, feed a slow clockwise turn script into
/// the input channel and let the scheduler play until the server declares
/// the run over.
async fn drive(url: String) -> Result<()> {
    info!("driving headless client against {url}");
    let api = GameApi::new(url);

    let fresh = {
        let api = api.clone();
        tokio::task::spawn_blocking(move || api.reset()).await??
    };
    info!(epoch = fresh.epoch, "run reset");

    let (input_tx, input_rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        let script = [Heading::Down, Heading::Left, Heading::Up, Heading::Right];
        for heading in script.into_iter().cycle() {
            tokio::time::sleep(Duration::from_millis(700)).await;
            if input_tx.send(heading).is_err() {
                return;
            }
        }
    });

    let view = run_client(api, input_rx).await;
    let state = view.state().expect("game over implies a received state");
    info!(
        score = state.score,
        high_score = state.high_score,
        reason = state.reason.as_deref().unwrap_or("unknown"),
        "run finished"
    );
    Ok(())
}
