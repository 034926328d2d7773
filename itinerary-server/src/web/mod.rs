//! Web layer for the itinerary pricer.
//!
//! Exposes the three pricing queries as JSON endpoints.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
