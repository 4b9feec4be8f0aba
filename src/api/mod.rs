//! API layer - document and health endpoints plus the static frontend

pub mod data;
pub mod health;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
