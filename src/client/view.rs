//! Client View State
//!
//! The locally displayed state: the last authoritative snapshot that
//! survived the staleness filter, plus the lifecycle the client tracks.
//! Responses may complete out of order; the `(epoch, step)` pair carried
//! by every snapshot decides which ones are allowed to land.

use crate::network::protocol::StateSnapshot;

/// Client-side session lifecycle.
///
/// `Running -> GameOver` happens only when a server response carries
/// `game_over = true`; the client never declares a game over locally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// No run underway; movement submissions are withheld.
    NotStarted,
    /// Run underway; the movement cadence submits the buffered heading.
    Running,
    /// Server declared the run over; only a reset leaves this state.
    GameOver,
}

/// Locally displayed state with staleness filtering.
#[derive(Debug)]
pub struct ClientView {
    lifecycle: Lifecycle,
    state: Option<StateSnapshot>,
}

impl Default for ClientView {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientView {
    /// Empty view; no state received yet.
    pub fn new() -> Self {
        Self {
            lifecycle: Lifecycle::NotStarted,
            state: None,
        }
    }

    /// Current lifecycle, `NotStarted` until anything is known.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// The snapshot the renderer would draw, if any arrived yet.
    pub fn state(&self) -> Option<&StateSnapshot> {
        self.state.as_ref()
    }

    /// Score feeding the speed curve; 0 until a snapshot arrives.
    pub fn score(&self) -> u32 {
        self.state.as_ref().map(|s| s.score).unwrap_or(0)
    }

    /// Whether the movement cadence may submit moves: a run must have
    /// been started and must not be over.
    pub fn may_submit_moves(&self) -> bool {
        self.lifecycle() == Lifecycle::Running
    }

    /// Begin the run (the player pressed start).
    pub fn start(&mut self) {
        if self.lifecycle == Lifecycle::NotStarted {
            self.lifecycle = Lifecycle::Running;
        }
    }

    /// Apply a server response, discarding stale ones.
    ///
    /// A response is stale when its epoch is older than the applied one,
    /// or same-epoch with an older step counter. A newer epoch means the
    /// session was reset (possibly by this client); it is adopted
    /// wholesale and the lifecycle returns to the start gate.
    ///
    /// Returns whether the snapshot was accepted.
    pub fn apply(&mut self, snapshot: StateSnapshot) -> bool {
        if let Some(current) = &self.state {
            if snapshot.epoch < current.epoch {
                return false;
            }
            if snapshot.epoch == current.epoch && snapshot.step < current.step {
                return false;
            }
            if snapshot.epoch > current.epoch {
                self.lifecycle = Lifecycle::NotStarted;
            }
        }

        if snapshot.game_over && self.lifecycle == Lifecycle::Running {
            self.lifecycle = Lifecycle::GameOver;
        }
        self.state = Some(snapshot);
        true
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(epoch: u64, step: u64, game_over: bool) -> StateSnapshot {
        StateSnapshot {
            snake: vec![[0, 0], [-20, 0], [-40, 0]],
            food: [100, 100],
            score: 0,
            high_score: 0,
            game_over,
            paused: false,
            epoch,
            step,
            message: None,
            reason: None,
        }
    }

    #[test]
    fn test_lifecycle_start_gate() {
        let mut view = ClientView::new();
        assert_eq!(view.lifecycle(), Lifecycle::NotStarted);
        assert!(!view.may_submit_moves());

        view.apply(snapshot(0, 0, false));
        assert_eq!(view.lifecycle(), Lifecycle::NotStarted);

        view.start();
        assert_eq!(view.lifecycle(), Lifecycle::Running);
        assert!(view.may_submit_moves());
    }

    #[test]
    fn test_game_over_requires_server_word() {
        let mut view = ClientView::new();
        view.apply(snapshot(0, 1, false));
        view.start();

        view.apply(snapshot(0, 2, true));
        assert_eq!(view.lifecycle(), Lifecycle::GameOver);
        assert!(!view.may_submit_moves());

        // start() has no effect on an ended run.
        view.start();
        assert_eq!(view.lifecycle(), Lifecycle::GameOver);
    }

    #[test]
    fn test_stale_step_discarded() {
        let mut view = ClientView::new();
        assert!(view.apply(snapshot(0, 5, false)));

        // A slow response from an earlier move arrives late.
        assert!(!view.apply(snapshot(0, 3, false)));
        assert_eq!(view.state().unwrap().step, 5);

        // Equal step is fine (poll and move can see the same state).
        assert!(view.apply(snapshot(0, 5, false)));
    }

    #[test]
    fn test_stale_epoch_discarded() {
        let mut view = ClientView::new();
        assert!(view.apply(snapshot(2, 0, false)));

        // In-flight move response from before the reset.
        assert!(!view.apply(snapshot(1, 40, true)));
        assert_eq!(view.state().unwrap().epoch, 2);
    }

    #[test]
    fn test_new_epoch_returns_to_start_gate() {
        let mut view = ClientView::new();
        view.apply(snapshot(0, 7, false));
        view.start();
        view.apply(snapshot(0, 8, true));
        assert_eq!(view.lifecycle(), Lifecycle::GameOver);

        // Reset response: new epoch, fresh run, back to NotStarted.
        assert!(view.apply(snapshot(1, 0, false)));
        assert_eq!(view.lifecycle(), Lifecycle::NotStarted);

        view.start();
        assert!(view.may_submit_moves());
    }

    #[test]
    fn test_score_defaults_to_zero() {
        let view = ClientView::new();
        assert_eq!(view.score(), 0);
    }
}
