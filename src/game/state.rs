//! Session State
//!
//! The authoritative aggregate for one game: snake, food, scoring, pause
//! and game-over latches, and the epoch/step counters the protocol echoes
//! so clients can detect stale responses.

use crate::core::grid::{Cell, GridConfig, Heading};
use crate::core::rng::{derive_run_seed, DeterministicRng};
use crate::game::direction::DirectionBuffer;
use crate::game::step::{step, StepResult};

/// Why a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    /// Head left the playable board.
    WallCollision,
    /// Head entered an occupied, non-vacating cell.
    SelfCollision,
    /// Snake filled the board; nowhere left to place food.
    Victory,
}

impl GameOverReason {
    /// Human-readable reason carried in responses.
    pub const fn as_str(self) -> &'static str {
        match self {
            GameOverReason::WallCollision => "wall collision",
            GameOverReason::SelfCollision => "self collision",
            GameOverReason::Victory => "victory",
        }
    }
}

/// Complete authoritative state of one session.
///
/// Owned exclusively by the session holder; the protocol layer only calls
/// the operations here and serializes the result. There are no ambient
/// globals: everything a run needs lives in this value.
#[derive(Clone, Debug)]
pub struct GameSession {
    /// Board geometry.
    pub config: GridConfig,
    /// Segments, head first. Non-empty; consecutive segments are exactly
    /// one cell apart in cardinal directions.
    pub snake: Vec<Cell>,
    /// Current travel heading of the head, with reversal rejection.
    pub heading: DirectionBuffer,
    /// Current food cell. Never placed on the snake.
    pub food: Cell,
    /// Points this run. Non-decreasing until reset.
    pub score: u32,
    /// Best score seen this process lifetime. Never decreases.
    pub high_score: u32,
    /// One-way latch; `Some` names the reason. Cleared only by reset.
    pub game_over: Option<GameOverReason>,
    /// Simulation suspended; steps are no-ops while set.
    pub paused: bool,
    /// Run counter, bumped by every reset. Responses from an older epoch
    /// are stale.
    pub epoch: u64,
    /// Accepted steps this run; tie-break within an epoch.
    pub step: u64,
    /// Seed material the per-run RNG is derived from.
    process_seed: u64,
    /// Food placement randomness for the current run.
    rng: DeterministicRng,
}

impl GameSession {
    /// Create a session with a fresh first run.
    ///
    /// `high_score` seeds the best-score watermark (typically loaded from
    /// disk); `process_seed` fixes the food sequence of every run this
    /// session will play.
    pub fn new(config: GridConfig, process_seed: u64, high_score: u32) -> Self {
        let mut session = Self {
            config,
            snake: Vec::new(),
            heading: DirectionBuffer::new(Heading::Right),
            food: Cell::new(0, 0),
            score: 0,
            high_score,
            game_over: None,
            paused: false,
            epoch: 0,
            step: 0,
            process_seed,
            rng: DeterministicRng::new(process_seed),
        };
        session.start_run();
        session
    }

    /// Canonical starting layout: three segments on the x axis, head at
    /// the origin, travelling right.
    pub fn starting_snake(config: &GridConfig) -> Vec<Cell> {
        let cell = config.cell_size;
        vec![
            Cell::new(0, 0),
            Cell::new(-cell, 0),
            Cell::new(-2 * cell, 0),
        ]
    }

    /// Apply one movement step with an optional requested heading.
    ///
    /// The single mutation path the protocol uses; see [`step`].
    pub fn move_snake(&mut self, requested: Option<Heading>) -> StepResult {
        step(self, requested)
    }

    /// Reinitialize for a new run.
    ///
    /// Starting layout, fresh random food, score 0, latches cleared; the
    /// high score is preserved and the epoch bumped. Safe to call mid-run
    /// (equivalent to forfeiting it).
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.start_run();
    }

    /// Suspend the simulation. Steps are no-ops until [`Self::resume`].
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume a suspended simulation.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Head cell.
    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    /// Whether `cell` is occupied by any segment.
    pub fn occupies(&self, cell: Cell) -> bool {
        self.snake.contains(&cell)
    }

    /// Whether the run has ended.
    pub fn is_over(&self) -> bool {
        self.game_over.is_some()
    }

    /// Pick a food cell uniformly among cells the snake does not occupy.
    ///
    /// `None` when the snake fills the whole board; the caller treats that
    /// as the victory condition rather than an error.
    pub(crate) fn place_food(&mut self) -> Option<Cell> {
        let free: Vec<Cell> = self
            .config
            .cells()
            .filter(|cell| !self.snake.contains(cell))
            .collect();
        self.rng.choose(&free).copied()
    }

    fn start_run(&mut self) {
        self.rng = DeterministicRng::new(derive_run_seed(self.process_seed, self.epoch));
        self.snake = Self::starting_snake(&self.config);
        self.heading = DirectionBuffer::new(Heading::Right);
        self.score = 0;
        self.game_over = None;
        self.paused = false;
        self.step = 0;
        // A three-segment snake can never fill a playable board, so the
        // starting placement always finds a cell.
        if let Some(cell) = self.place_food() {
            self.food = cell;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn contiguous(snake: &[Cell], cell_size: i32) -> bool {
        snake.windows(2).all(|pair| {
            let dx = (pair[0].x - pair[1].x).abs();
            let dy = (pair[0].y - pair[1].y).abs();
            dx + dy == cell_size
        })
    }

    #[test]
    fn test_new_session_layout() {
        let session = GameSession::new(GridConfig::default(), 7, 0);

        assert_eq!(
            session.snake,
            vec![Cell::new(0, 0), Cell::new(-20, 0), Cell::new(-40, 0)]
        );
        assert_eq!(session.heading.current(), Heading::Right);
        assert_eq!(session.score, 0);
        assert!(!session.is_over());
        assert!(!session.paused);
        assert!(contiguous(&session.snake, 20));
    }

    #[test]
    fn test_initial_food_off_snake_and_aligned() {
        for seed in 0..32 {
            let session = GameSession::new(GridConfig::default(), seed, 0);
            assert!(!session.occupies(session.food), "seed {seed}");
            assert!(session.config.contains(session.food));
            assert!(session.config.is_aligned(session.food));
        }
    }

    #[test]
    fn test_reset_preserves_high_score_and_bumps_epoch() {
        let mut session = GameSession::new(GridConfig::default(), 1, 40);
        session.score = 12;
        session.high_score = 41;
        session.game_over = Some(GameOverReason::WallCollision);
        session.paused = true;
        let epoch = session.epoch;

        session.reset();

        assert_eq!(session.score, 0);
        assert_eq!(session.high_score, 41);
        assert_eq!(session.game_over, None);
        assert!(!session.paused);
        assert_eq!(session.epoch, epoch + 1);
        assert_eq!(session.step, 0);
        assert_eq!(session.snake, GameSession::starting_snake(&session.config));
    }

    #[test]
    fn test_reset_mid_run_is_safe() {
        // Forfeiting a healthy run is the same as resetting a dead one.
        let mut session = GameSession::new(GridConfig::default(), 1, 0);
        session.move_snake(None);
        session.move_snake(Some(Heading::Up));

        session.reset();

        assert_eq!(session.snake.len(), 3);
        assert_eq!(session.heading.current(), Heading::Right);
    }

    #[test]
    fn test_food_sequence_reproducible() {
        let a = GameSession::new(GridConfig::default(), 99, 0);
        let b = GameSession::new(GridConfig::default(), 99, 0);
        assert_eq!(a.food, b.food);

        // A reset re-derives the run seed, so epochs differ from each
        // other but match across identically seeded sessions.
        let mut a = a;
        let mut b = b;
        a.reset();
        b.reset();
        assert_eq!(a.food, b.food);
    }
}
