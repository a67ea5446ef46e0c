//! Headless Sync Client
//!
//! Everything a renderer needs except the rendering: blocking HTTP calls
//! to the three sync routes, the locally displayed state with its
//! staleness filter, and the two tick cadences that drive polling and
//! movement commits. The client never runs authoritative logic; it shows
//! whatever state it last received.

pub mod api;
pub mod scheduler;
pub mod view;

pub use api::{ApiError, GameApi};
pub use scheduler::{run_client, TickScheduler};
pub use view::{ClientView, Lifecycle};
