//! Authoritative Movement Step
//!
//! The single state transition. Everything the protocol can do to a run
//! funnels through [`step`]; handlers never mutate session fields
//! directly, so every invariant is enforced in one place.

use crate::core::grid::Heading;
use crate::game::state::{GameOverReason, GameSession};

/// What one call to [`step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Head advanced one cell; the tail vacated its cell.
    Moved,
    /// Food consumed: snake grew by one, food was replaced.
    Ate,
    /// Food consumed and the board is full; run latched as a victory.
    Won,
    /// Collision; run latched as game over with the carried reason.
    Died(GameOverReason),
    /// Run already over; nothing changed.
    AlreadyOver,
    /// Simulation paused; nothing changed.
    Paused,
}

/// Result of a step.
#[derive(Clone, Copy, Debug)]
pub struct StepResult {
    /// What the step did.
    pub outcome: StepOutcome,
    /// Step counter after the call.
    pub step: u64,
}

/// Run one authoritative movement step.
///
/// # Transition
///
/// 1. A finished run is inert: repeated calls return the unchanged state.
/// 2. A paused run is likewise inert until resumed.
/// 3. `requested` is applied through the reversal-rejecting buffer; the
///    rule holds even for callers that bypassed client-side buffering.
///    `None` (absent or unrecognized direction) keeps the prior heading
///    and the step still executes with it.
/// 4. Collision is decided before any movement is committed. The tail
///    cell is legal to enter only when it vacates this step, i.e. when no
///    food is consumed. On collision the latch is set and snake, food and
///    score keep their pre-step values.
/// 5. On food consumption the tail is kept (growth), the score rises by
///    one and food is placed uniformly among unoccupied cells; a full
///    board is a victory, not a failure.
pub fn step(session: &mut GameSession, requested: Option<Heading>) -> StepResult {
    if session.game_over.is_some() {
        return StepResult {
            outcome: StepOutcome::AlreadyOver,
            step: session.step,
        };
    }
    if session.paused {
        return StepResult {
            outcome: StepOutcome::Paused,
            step: session.step,
        };
    }

    if let Some(heading) = requested {
        session.heading.request(heading);
    }
    let heading = session.heading.current();

    let new_head = session.head().step(heading, session.config.cell_size);
    let eats = new_head == session.food;

    if !session.config.contains(new_head) {
        return latch(session, GameOverReason::WallCollision);
    }

    // The tail is excluded from the collision body only when it moves
    // away this step.
    let body = if eats {
        &session.snake[..]
    } else {
        &session.snake[..session.snake.len() - 1]
    };
    if body.contains(&new_head) {
        return latch(session, GameOverReason::SelfCollision);
    }

    session.snake.insert(0, new_head);
    let outcome = if eats {
        session.score += 1;
        if session.score > session.high_score {
            session.high_score = session.score;
        }
        match session.place_food() {
            Some(cell) => {
                session.food = cell;
                StepOutcome::Ate
            }
            None => {
                session.game_over = Some(GameOverReason::Victory);
                StepOutcome::Won
            }
        }
    } else {
        session.snake.pop();
        StepOutcome::Moved
    };

    session.step += 1;
    StepResult {
        outcome,
        step: session.step,
    }
}

/// Latch the game-over state, leaving snake/food/score untouched.
fn latch(session: &mut GameSession, reason: GameOverReason) -> StepResult {
    session.game_over = Some(reason);
    session.step += 1;
    StepResult {
        outcome: StepOutcome::Died(reason),
        step: session.step,
    }
}

// =============================================================================
// TESTS
// =============================================================================
