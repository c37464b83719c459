//! Engine error types

use crate::store::StoreError;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Cart construction and checkout errors
///
/// Every variant except `Store` is a local-input-validation failure raised
/// while the cart is being built — a cart that constructed successfully can
/// always compute its totals. `Store` surfaces a failed atomic checkout
/// write unchanged.
#[derive(Debug, Error)]
pub enum CartError {
    #[error("restaurant not found: {0}")]
    RestaurantNotFound(String),

    #[error("invalid product id: {0}")]
    InvalidProduct(String),

    #[error("invalid quantity {quantity} for product {product_id}")]
    InvalidQuantity { product_id: String, quantity: i64 },

    #[error("invalid addon group id: {0}")]
    InvalidAddonGroup(String),

    #[error("invalid addon option id: {0}")]
    InvalidAddonOption(String),

    #[error("invalid delivery type: {}", .0.as_deref().unwrap_or("<missing>"))]
    InvalidDeliveryType(Option<String>),

    #[error("delivery address is required")]
    InvalidDeliveryAddress,

    #[error("promo code not found: {0}")]
    PromoCodeNotFound(String),

    #[error("promo code not eligible: {0}")]
    PromoCodeIneligible(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<CartError> for AppError {
    fn from(err: CartError) -> Self {
        let message = err.to_string();
        let code = match &err {
            CartError::RestaurantNotFound(_) => ErrorCode::RestaurantNotFound,
            CartError::InvalidProduct(_) => ErrorCode::InvalidProduct,
            CartError::InvalidQuantity { .. } => ErrorCode::InvalidQuantity,
            CartError::InvalidAddonGroup(_) => ErrorCode::InvalidAddonGroup,
            CartError::InvalidAddonOption(_) => ErrorCode::InvalidAddonOption,
            CartError::InvalidDeliveryType(_) => ErrorCode::InvalidDeliveryType,
            CartError::InvalidDeliveryAddress => ErrorCode::InvalidDeliveryAddress,
            CartError::PromoCodeNotFound(_) => ErrorCode::PromoCodeNotFound,
            CartError::PromoCodeIneligible(_) => ErrorCode::PromoCodeIneligible,
            CartError::Store(_) => ErrorCode::StorageError,
        };
        AppError::with_message(code, message)
    }
}
