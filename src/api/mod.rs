//! API layer - HTTP endpoints and boundary types

pub mod generate;
pub mod health;
pub mod router;
pub mod state;
pub mod types;

pub use router::create_router;
pub use state::{AppState, ProviderFactory};
