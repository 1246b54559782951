//! Web layer for the transit distance service.
//!
//! Provides HTTP endpoints for browsing stations and lines and for asking
//! how many stops separate a user from a reported inspector.

mod dto;
mod routes;
mod state;


pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
