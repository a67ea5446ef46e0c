//! Tick Scheduler
//!
//! The two client cadences: a fixed render/poll tick and a movement-commit
//! tick whose period follows the speed curve. The cadences are independent
//! and never conflated; a slow server response delays neither. Deadline
//! bookkeeping lives apart from the driver loop so the cadence logic is
//! testable without a clock.

use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::client::api::{ApiError, GameApi};
use crate::client::view::{ClientView, Lifecycle};
use crate::core::grid::Heading;
use crate::game::direction::DirectionBuffer;
use crate::game::speed;
use crate::network::protocol::StateSnapshot;
use crate::POLL_INTERVAL_MS;

/// Which cadences fired at a given instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DueTicks {
    /// The fixed-rate render/poll cadence fired.
    pub poll: bool,
    /// The variable movement-commit cadence fired.
    pub movement: bool,
}

/// Deadline bookkeeping for both cadences.
#[derive(Debug)]
pub struct TickScheduler {
    next_poll: Instant,
    next_movement: Instant,
}

impl TickScheduler {
    /// Arm both cadences relative to `now`.
    pub fn new(now: Instant) -> Self {
        Self {
            next_poll: now + Duration::from_millis(POLL_INTERVAL_MS),
            next_movement: now + Duration::from_millis(speed::interval_ms(0)),
        }
    }

    /// The next instant at which anything is due.
    pub fn next_deadline(&self) -> Instant {
        self.next_poll.min(self.next_movement)
    }

    /// Collect the cadences due at `now` and re-arm them.
    ///
    /// The movement period is re-read from `score` on every re-arm, so a
    /// score change takes effect at the very next commit.
    pub fn due(&mut self, now: Instant, score: u32) -> DueTicks {
        let mut ticks = DueTicks {
            poll: false,
            movement: false,
        };
        if now >= self.next_poll {
            ticks.poll = true;
            self.next_poll = now + Duration::from_millis(POLL_INTERVAL_MS);
        }
        if now >= self.next_movement {
            ticks.movement = true;
            self.next_movement = now + Duration::from_millis(speed::interval_ms(score));
        }
        ticks
    }
}

enum RequestKind {
    Poll,
    Move(Heading),
}

/// Hand a request to a blocking worker; its result lands on `tx`.
///
/// Requests deliberately run detached so the tick loop never waits on the
/// network. Responses may therefore complete out of order; the view's
/// staleness filter sorts that out.
fn dispatch(
    tx: &mpsc::UnboundedSender<Result<StateSnapshot, ApiError>>,
    api: GameApi,
    kind: RequestKind,
) {
    let tx = tx.clone();
    tokio::task::spawn_blocking(move || {
        let result = match kind {
            RequestKind::Poll => api.get_state(),
            RequestKind::Move(heading) => api.submit_move(heading),
        };
        let _ = tx.send(result);
    });
}

/// Drive a headless client against `api` until the server declares the
/// run over, then return the final view.
///
/// One cooperative task multiplexes both cadences and the `input` stream
/// of direction events. Directions coalesce in a [`DirectionBuffer`]
/// (last write wins) and the buffered heading is submitted on each
/// movement tick once a run is underway. Transport failures are logged
/// and the last displayed state kept; the next poll self-corrects.
pub async fn run_client(api: GameApi, mut input: mpsc::UnboundedReceiver<Heading>) -> ClientView {
    let (response_tx, mut responses) =
        mpsc::unbounded_channel::<Result<StateSnapshot, ApiError>>();
    let mut view = ClientView::new();
    let mut buffer = DirectionBuffer::new(Heading::Right);
    let mut scheduler = TickScheduler::new(Instant::now());
    let mut input_open = true;

    loop {
        let deadline = tokio::time::Instant::from_std(scheduler.next_deadline());
        tokio::select! {
            _ = tokio::time::sleep_until(deadline) => {
                let due = scheduler.due(Instant::now(), view.score());
                if due.poll {
                    dispatch(&response_tx, api.clone(), RequestKind::Poll);
                }
                if due.movement && view.may_submit_moves() {
                    dispatch(&response_tx, api.clone(), RequestKind::Move(buffer.current()));
                }
            }
            heading = input.recv(), if input_open => {
                match heading {
                    Some(heading) => {
                        buffer.request(heading);
                    }
                    None => input_open = false,
                }
            }
            Some(result) = responses.recv() => {
                match result {
                    Ok(snapshot) => {
                        if !view.apply(snapshot) {
                            debug!("discarded stale response");
                        } else if view.lifecycle() == Lifecycle::NotStarted {
                            // Headless driver: the "player" starts as soon
                            // as state is known, and again after a reset.
                            view.start();
                        }
                    }
                    Err(error) => {
                        warn!(%error, "request failed; keeping last displayed state");
                    }
                }
            }
        }

        if view.lifecycle() == Lifecycle::GameOver {
            info!(score = view.score(), "server declared game over");
            return view;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
