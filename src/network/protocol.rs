//! Wire Format
//!
//! Request parsing and the authoritative snapshot body. Responses carry
//! full state rather than deltas; the `(epoch, step)` pair lets a client
//! order them and drop the stale ones.

use serde::{Deserialize, Serialize};

use crate::core::grid::Heading;
use crate::game::state::GameSession;

/// `POST /move` request body, JSON form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Direction token, one of `up`, `down`, `left`, `right`.
    pub direction: String,
}

/// Full authoritative snapshot, the response body of every route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Snake segments, head first, as `[x, y]` pairs in grid units.
    pub snake: Vec<[i32; 2]>,
    /// Food cell.
    pub food: [i32; 2],
    /// Points this run.
    pub score: u32,
    /// Best score this process lifetime.
    pub high_score: u32,
    /// Terminal latch.
    pub game_over: bool,
    /// Simulation suspended.
    pub paused: bool,
    /// Run counter; responses from an older epoch are stale.
    pub epoch: u64,
    /// Accepted steps this run; tie-break within an epoch.
    pub step: u64,
    /// Present once the run has ended or while paused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Why the run ended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl StateSnapshot {
    /// Capture the current session state.
    pub fn capture(session: &GameSession) -> Self {
        let message = if session.is_over() {
            Some("game over".to_owned())
        } else if session.paused {
            Some("game paused".to_owned())
        } else {
            None
        };

        Self {
            snake: session.snake.iter().map(|cell| cell.to_pair()).collect(),
            food: session.food.to_pair(),
            score: session.score,
            high_score: session.high_score,
            game_over: session.is_over(),
            paused: session.paused,
            epoch: session.epoch,
            step: session.step,
            message,
            reason: session.game_over.map(|reason| reason.as_str().to_owned()),
        }
    }
}

/// Extract the direction token from a `/move` body.
///
/// Accepts `{"direction":"up"}` (JSON) and `direction=up` (the form
/// encoding browser clients send). Unknown tokens and malformed bodies
/// map to `None`; the step then runs with the prior heading.
pub fn parse_direction(content_type: Option<&str>, body: &[u8]) -> Option<Heading> {
    let text = std::str::from_utf8(body).ok()?;
    let looks_like_json = content_type.is_some_and(|t| t.contains("json"))
        || text.trim_start().starts_with('{');

    let token = if looks_like_json {
        serde_json::from_str::<MoveRequest>(text).ok()?.direction
    } else {
        form_value(text, "direction")?.to_owned()
    };
    Heading::parse(&token)
}

/// Look up `key` in a `k=v&k=v` body. The constrained direction tokens
/// need no percent-decoding.
fn form_value<'a>(body: &'a str, key: &str) -> Option<&'a str> {
    body.trim().split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == key).then_some(v)
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::GridConfig;

    #[test]
    fn test_parse_json_body() {
        let body = br#"{"direction":"up"}"#;
        assert_eq!(
            parse_direction(Some("application/json"), body),
            Some(Heading::Up)
        );
        // Content type missing but the body is unmistakably JSON.
        assert_eq!(parse_direction(None, body), Some(Heading::Up));
    }

    #[test]
    fn test_parse_form_body() {
        assert_eq!(
            parse_direction(
                Some("application/x-www-form-urlencoded"),
                b"direction=left"
            ),
            Some(Heading::Left)
        );
        assert_eq!(
            parse_direction(None, b"other=1&direction=down"),
            Some(Heading::Down)
        );
    }

    #[test]
    fn test_unknown_tokens_are_absorbed() {
        assert_eq!(parse_direction(None, b"direction=sideways"), None);
        assert_eq!(
            parse_direction(Some("application/json"), br#"{"direction":"x"}"#),
            None
        );
        assert_eq!(parse_direction(None, b""), None);
        assert_eq!(parse_direction(Some("application/json"), b"{broken"), None);
        assert_eq!(parse_direction(None, &[0xff, 0xfe]), None);
    }

    #[test]
    fn test_snapshot_shape() {
        let session = GameSession::new(GridConfig::default(), 5, 17);
        let snapshot = StateSnapshot::capture(&session);

        assert_eq!(snapshot.snake, vec![[0, 0], [-20, 0], [-40, 0]]);
        assert_eq!(snapshot.high_score, 17);
        assert!(!snapshot.game_over);
        assert_eq!(snapshot.epoch, 0);
        assert_eq!(snapshot.step, 0);

        // Quiet runs serialize without message/reason keys.
        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json.get("message").is_none());
        assert!(json.get("reason").is_none());
        assert!(json.get("snake").unwrap().is_array());
    }

    #[test]
    fn test_snapshot_message_after_game_over() {
        let mut session = GameSession::new(GridConfig::default(), 5, 0);
        session.game_over = Some(crate::game::state::GameOverReason::WallCollision);

        let snapshot = StateSnapshot::capture(&session);
        assert!(snapshot.game_over);
        assert_eq!(snapshot.message.as_deref(), Some("game over"));
        assert_eq!(snapshot.reason.as_deref(), Some("wall collision"));
    }

    #[test]
    fn test_snapshot_message_while_paused() {
        let mut session = GameSession::new(GridConfig::default(), 5, 0);
        session.pause();

        let snapshot = StateSnapshot::capture(&session);
        assert!(!snapshot.game_over);
        assert_eq!(snapshot.message.as_deref(), Some("game paused"));
        assert_eq!(snapshot.reason, None);
    }
}
