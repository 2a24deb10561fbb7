//! Web layer for the route query service.
//!
//! Provides HTTP endpoints for inspecting the startup graph and running
//! queries against it or against a caller-supplied edge list.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
