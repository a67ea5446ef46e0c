//! Core Deterministic Primitives
//!
//! Grid arithmetic and randomness shared by the simulation.
//! Everything here is integer-only and reproducible from a seed:
//! no floating point, no system time, no OS entropy.

pub mod grid;
pub mod rng;

pub use grid::{Cell, GridConfig, Heading};
pub use rng::DeterministicRng;
