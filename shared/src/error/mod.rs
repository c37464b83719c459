//! Unified error types for the ordering platform
//!
//! Error codes are shared across the engine and the services embedding it;
//! [`AppError`] is the serializable shape handed to transport layers.

mod codes;
mod types;

pub use codes::ErrorCode;
pub use types::AppError;
