//! Promo Code Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discount kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromoCodeType {
    /// Percentage off the item sum
    DiscountPercent,
    /// Fixed amount off the item sum
    DiscountValue,
    /// Waives the delivery cost instead of discounting the item sum
    FreeDelivery,
}

/// Promo code entity
///
/// Read-only to the pricing engine. Usage counters are incremented by the
/// surrounding persistence layer after an order commits, never here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromoCode {
    pub id: String,
    pub code: String,
    pub kind: PromoCodeType,
    /// Percentage (0-100) for DISCOUNT_PERCENT, currency amount otherwise
    pub amount: f64,
    /// Minimum item sum required to apply the code
    pub min_order_amount: f64,
    /// Total usage limit (0 = unlimited)
    pub usage_limit: u32,
    /// Recorded uses so far
    pub usages: u32,
    /// Restricts the code to a single customer
    pub connected_customer_id: Option<String>,
    /// Whether the same customer may use the code more than once
    pub can_use_multiple_times: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl PromoCode {
    /// Active and not expired at `now` (expiry unset or strictly in the future)
    pub fn is_redeemable_at(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.expires_at.is_none_or(|t| t > now)
    }
}
