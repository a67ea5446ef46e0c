//! # Gridsnake Server
//!
//! Authoritative snake simulation with polled state synchronization.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    GRIDSNAKE SERVER                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── grid.rs     - Cell lattice, headings, board bounds      │
//! │  └── rng.rs      - Deterministic Xorshift128+ PRNG           │
//! │                                                              │
//! │  game/           - Game logic (deterministic)                │
//! │  ├── direction.rs- Pending-heading buffer                    │
//! │  ├── speed.rs    - Score-to-interval curve                   │
//! │  ├── state.rs    - Session state and lifecycle               │
//! │  ├── step.rs     - Authoritative movement step               │
//! │  └── scores.rs   - High-score storage                        │
//! │                                                              │
//! │  network/        - HTTP surface (non-deterministic)          │
//! │  ├── protocol.rs - Request parsing, snapshot wire format     │
//! │  └── server.rs   - Routes and the shared session             │
//! │                                                              │
//! │  client/         - Headless sync client                      │
//! │  ├── api.rs      - Blocking HTTP calls                       │
//! │  ├── view.rs     - Displayed state, staleness filter         │
//! │  └── scheduler.rs- Poll and movement cadences                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//!
//! The `core/` and `game/` modules are deterministic: integer-only grid
//! arithmetic, no system time dependencies, all randomness from a seeded
//! Xorshift128+. Given the same seed and the same heading sequence, a run
//! reproduces exactly. Only the `network/` and `client/` layers touch the
//! clock and the socket.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod client;
pub mod core;
pub mod game;
pub mod network;

// Re-export commonly used types
pub use crate::core::grid::{Cell, GridConfig, Heading};
pub use crate::core::rng::DeterministicRng;
pub use crate::game::direction::DirectionBuffer;
pub use crate::game::speed::{interval_ms, BASE_INTERVAL_MS, MIN_INTERVAL_MS};
pub use crate::game::state::{GameOverReason, GameSession};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed render/poll cadence of the client (milliseconds).
///
/// Independent of the movement cadence, which follows
/// [`game::speed::interval_ms`].
pub const POLL_INTERVAL_MS: u64 = 50;
