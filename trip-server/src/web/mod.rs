//! Web layer for the trip planner.
//!
//! A JSON API over per-browser search sessions, plus static assets for
//! the front end that renders them.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, DEFAULT_SESSION_TTL, Session};
