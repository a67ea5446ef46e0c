//! Blocking HTTP Client
//!
//! Thin wrappers over the sync routes. Calls block the worker they run
//! on; the scheduler dispatches them from blocking tasks so the tick loop
//! itself never waits on the network.

use std::time::Duration;

use crate::core::grid::Heading;
use crate::network::protocol::{MoveRequest, StateSnapshot};

/// Per-request timeout. A hung request must not pin a worker forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

/// Client-side errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Connection or HTTP-level failure.
    #[error("transport: {0}")]
    Transport(#[from] Box<ureq::Error>),
    /// Response body was not a valid snapshot.
    #[error("decode: {0}")]
    Decode(#[from] std::io::Error),
}

/// HTTP handle to one game server.
#[derive(Clone)]
pub struct GameApi {
    agent: ureq::Agent,
    base_url: String,
}

impl GameApi {
    /// Handle for the server at `base_url` (e.g. `http://127.0.0.1:5003`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        let agent = ureq::AgentBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .build();
        Self { agent, base_url }
    }

    /// `POST /move`: submit `direction` and receive the resulting state.
    pub fn submit_move(&self, direction: Heading) -> Result<StateSnapshot, ApiError> {
        let body = MoveRequest {
            direction: direction.as_str().to_owned(),
        };
        let response = self
            .agent
            .post(&format!("{}/move", self.base_url))
            .send_json(body)
            .map_err(Box::new)?;
        Ok(response.into_json()?)
    }

    /// `GET /get_state`: poll the authoritative state without mutating it.
    pub fn get_state(&self) -> Result<StateSnapshot, ApiError> {
        let response = self
            .agent
            .get(&format!("{}/get_state", self.base_url))
            .call()
            .map_err(Box::new)?;
        Ok(response.into_json()?)
    }

    /// `POST /reset_game`: start a fresh run, preserving the high score.
    pub fn reset(&self) -> Result<StateSnapshot, ApiError> {
        let response = self
            .agent
            .post(&format!("{}/reset_game", self.base_url))
            .call()
            .map_err(Box::new)?;
        Ok(response.into_json()?)
    }
}

impl std::fmt::Debug for GameApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameApi")
            .field("base_url", &self.base_url)
            .finish()
    }
}
