//! API boundary types

pub mod error;
pub mod generate;
pub mod json;

pub use error::{ApiError, ApiErrorBody};
pub use generate::{GenerateRequest, GenerateResponse};
pub use json::Json;
