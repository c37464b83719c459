//! Persistence and notification interfaces for checkout

use shared::order::OrderSnapshot;
use thiserror::Error;

/// Order persistence failure
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("order store rejected the snapshot: {0}")]
    Rejected(String),

    #[error("order store unavailable: {0}")]
    Unavailable(String),
}

/// Durable order creation
///
/// `create` must write the snapshot and all of its nested line/addon
/// records as one atomic unit — either everything commits or nothing does.
/// Implementations wrap the write in a transaction; the engine retains no
/// state on failure and simply propagates the error.
pub trait OrderStore {
    fn create(&self, snapshot: &OrderSnapshot) -> Result<(), StoreError>;
}

/// Fire-and-forget staff notification
///
/// Invoked once per order that becomes visible to restaurant staff at
/// checkout. Orders awaiting online payment are withheld; the payment
/// confirmation flow notifies separately once their status flips.
pub trait OrderNotifier {
    fn order_placed(&self, snapshot: &OrderSnapshot);
}
