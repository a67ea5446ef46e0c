//! HTTP Game Server
//!
//! axum routes over one shared session. Mutating routes take the write
//! lock, so concurrent `/move` requests serialize and each accepted
//! heading is applied exactly once; `/get_state` only reads.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header::CONTENT_TYPE, HeaderMap};
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::core::grid::GridConfig;
use crate::game::scores;
use crate::game::state::GameSession;
use crate::game::step::StepOutcome;
use crate::network::protocol::{parse_direction, StateSnapshot};

/// Shared handle to the single authoritative session.
pub type SharedSession = Arc<RwLock<GameSession>>;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address.
    pub bind_addr: SocketAddr,
    /// High-score storage path.
    pub high_score_path: PathBuf,
    /// Seed material for food placement; a fixed seed reproduces every
    /// run of the process.
    pub rng_seed: u64,
    /// Board geometry.
    pub grid: GridConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:5003".parse().unwrap(),
            high_score_path: PathBuf::from(scores::HIGH_SCORE_FILE),
            rng_seed: 0,
            grid: GridConfig::default(),
        }
    }
}

/// Game server errors.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind or serve.
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone)]
struct AppState {
    session: SharedSession,
    high_score_path: PathBuf,
}

/// Build the route table over `session`.
pub fn router(session: SharedSession, high_score_path: PathBuf) -> Router {
    let state = AppState {
        session,
        high_score_path,
    };
    Router::new()
        .route("/move", post(move_snake))
        .route("/get_state", get(get_state))
        .route("/reset_game", post(reset_game))
        .route("/pause_game", post(pause_game))
        .route("/resume_game", post(resume_game))
        .with_state(state)
}

/// Bind and serve until the task is cancelled.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let high_score = scores::load(&config.high_score_path);
    let session = Arc::new(RwLock::new(GameSession::new(
        config.grid,
        config.rng_seed,
        high_score,
    )));

    let app = router(session, config.high_score_path);
    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("game server listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

/// `POST /move`: apply one movement step with the submitted direction.
///
/// An unrecognized or reversing direction is absorbed and the step runs
/// with the prior heading; calling after game over is a no-op response.
async fn move_snake(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<StateSnapshot> {
    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());
    let direction = parse_direction(content_type, &body);

    let mut session = state.session.write().await;
    let result = session.move_snake(direction);

    match result.outcome {
        StepOutcome::Died(reason) => {
            info!(
                reason = reason.as_str(),
                score = session.score,
                high_score = session.high_score,
                "run ended"
            );
            scores::save(&state.high_score_path, session.high_score);
        }
        StepOutcome::Won => {
            info!(score = session.score, "board filled, run won");
            scores::save(&state.high_score_path, session.high_score);
        }
        StepOutcome::Ate => {
            debug!(score = session.score, length = session.snake.len(), "food consumed");
        }
        _ => {}
    }

    Json(StateSnapshot::capture(&session))
}

/// `GET /get_state`: current authoritative state, no mutation.
async fn get_state(State(state): State<AppState>) -> Json<StateSnapshot> {
    let session = state.session.read().await;
    Json(StateSnapshot::capture(&session))
}

/// `POST /reset_game`: start a fresh run, preserving the high score.
async fn reset_game(State(state): State<AppState>) -> Json<StateSnapshot> {
    let mut session = state.session.write().await;
    scores::save(&state.high_score_path, session.high_score);
    session.reset();
    info!(epoch = session.epoch, "session reset");
    Json(StateSnapshot::capture(&session))
}

/// `POST /pause_game`: suspend the simulation.
async fn pause_game(State(state): State<AppState>) -> Json<StateSnapshot> {
    let mut session = state.session.write().await;
    session.pause();
    Json(StateSnapshot::capture(&session))
}

/// `POST /resume_game`: resume a suspended simulation.
async fn resume_game(State(state): State<AppState>) -> Json<StateSnapshot> {
    let mut session = state.session.write().await;
    session.resume();
    Json(StateSnapshot::capture(&session))
}

// =============================================================================
// TESTS
// =============================================================================
