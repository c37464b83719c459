//! Shared types for the ordering platform
//!
//! Plain domain models, the order snapshot types, and the coded error
//! surface used by the pricing engine and the services around it. This
//! crate carries no business logic — computation lives in `order-engine`.

pub mod error;
pub mod models;
pub mod order;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};
