//! HTTP Surface
//!
//! The only boundary between the simulation and the excluded rendering
//! code. JSON request/response over plain HTTP; no streaming, no push.
//!
//! - `protocol`: request parsing and the snapshot every route returns
//! - `server`: axum routes over one shared, lock-serialized session

pub mod protocol;
pub mod server;

pub use protocol::StateSnapshot;
pub use server::{serve, ServerConfig, ServerError};
