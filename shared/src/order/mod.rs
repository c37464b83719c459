//! Order types
//!
//! - **types**: fulfillment, payment, status, and contact-data enums/structs
//! - **snapshot**: the immutable record materialized at checkout

pub mod snapshot;
pub mod types;

pub use snapshot::{OrderLine, OrderLineAddon, OrderSnapshot};
pub use types::{
    DeliveryAddress, DeliveryType, OrderSource, OrderStatus, PaymentMethod, PaymentStatus,
    PersonalData,
};
