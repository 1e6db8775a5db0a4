//! JSON API surface.
//!
//! Exposes the planner's operations as a small fixed set of HTTP
//! endpoints with strict input schemas, consumed by the external
//! conversation layer.

pub mod dto;
mod routes;
mod state;

pub use routes::{AppError, create_router};
pub use state::AppState;
