//! Game Logic Module
//!
//! The authoritative simulation. 100% deterministic.
//!
//! ## Module Structure
//!
//! - `direction`: pending-heading buffer with reversal rejection
//! - `speed`: score-to-movement-interval curve
//! - `state`: session aggregate and run lifecycle
//! - `step`: the single authoritative state transition
//! - `scores`: high-score load/save

pub mod direction;
pub mod scores;
pub mod speed;
pub mod state;
pub mod step;

// Re-export key types
pub use direction::DirectionBuffer;
pub use state::{GameOverReason, GameSession};
pub use step::{step, StepOutcome, StepResult};
