//! Unified error codes for the ordering platform
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order/cart errors
//! - 5xxx: Promo code errors
//! - 6xxx: Catalog errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient
/// serialization and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 4xxx: Order ====================
    /// Item quantity is missing, zero, or negative
    InvalidQuantity = 4001,
    /// Delivery type tag is missing or not recognized
    InvalidDeliveryType = 4002,
    /// Delivery address is required but missing
    InvalidDeliveryAddress = 4003,

    // ==================== 5xxx: Promo ====================
    /// Promo code does not exist, is inactive, or has expired
    PromoCodeNotFound = 5001,
    /// Promo code exists but the order/customer is not eligible
    PromoCodeIneligible = 5002,

    // ==================== 6xxx: Catalog ====================
    /// Product id does not resolve to a purchasable product
    InvalidProduct = 6001,
    /// Addon group does not exist or belongs to another product
    InvalidAddonGroup = 6002,
    /// Addon option does not exist or belongs to another group
    InvalidAddonOption = 6003,
    /// Restaurant id does not resolve
    RestaurantNotFound = 6004,

    // ==================== 9xxx: System ====================
    /// Durable order write failed
    StorageError = 9001,
}

impl ErrorCode {
    /// Default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidQuantity => "Please supply a valid quantity",
            ErrorCode::InvalidDeliveryType => "Please supply a valid delivery type",
            ErrorCode::InvalidDeliveryAddress => "Please supply a valid delivery address",
            ErrorCode::PromoCodeNotFound => "Promo code is no longer active",
            ErrorCode::PromoCodeIneligible => "Promo code cannot be used for this order",
            ErrorCode::InvalidProduct => "Please supply a valid product ID",
            ErrorCode::InvalidAddonGroup => "Please supply a valid addon group ID",
            ErrorCode::InvalidAddonOption => "Please supply a valid addon ID",
            ErrorCode::RestaurantNotFound => "Restaurant not found",
            ErrorCode::StorageError => "Order could not be stored",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            4001 => Ok(ErrorCode::InvalidQuantity),
            4002 => Ok(ErrorCode::InvalidDeliveryType),
            4003 => Ok(ErrorCode::InvalidDeliveryAddress),
            5001 => Ok(ErrorCode::PromoCodeNotFound),
            5002 => Ok(ErrorCode::PromoCodeIneligible),
            6001 => Ok(ErrorCode::InvalidProduct),
            6002 => Ok(ErrorCode::InvalidAddonGroup),
            6003 => Ok(ErrorCode::InvalidAddonOption),
            6004 => Ok(ErrorCode::RestaurantNotFound),
            9001 => Ok(ErrorCode::StorageError),
            _ => Err(format!("unknown error code: {}", value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u16)
    }
}
