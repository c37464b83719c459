//! Order snapshot - the immutable record materialized at checkout
//!
//! Line and addon names are frozen at order time so later catalog edits
//! never change what a stored order says was bought. The engine creates a
//! snapshot exactly once per checkout and never mutates it; status
//! transitions after that point are driven externally.

use super::types::{
    DeliveryAddress, DeliveryType, OrderSource, OrderStatus, PaymentMethod, PaymentStatus,
    PersonalData,
};
use crate::types::{TenantId, Timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Frozen addon selection on an order line
///
/// One record per selected option, quantity 1 each — a repeated option id
/// in the cart produces repeated records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineAddon {
    pub group_id: String,
    pub option_id: String,
    /// Group name captured at order time
    pub group_name: String,
    /// Option name captured at order time
    pub option_name: String,
    pub extra_price: f64,
    pub quantity: u32,
}

/// Frozen order line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: String,
    /// Product name captured at order time
    pub name: String,
    pub description: Option<String>,
    pub quantity: u32,
    /// Line subtotal: quantity x (unit price + addon extras)
    pub subtotal: f64,
    #[serde(default)]
    pub addons: Vec<OrderLineAddon>,
}

/// Order snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSnapshot {
    /// Order ID (minted at checkout)
    pub order_id: String,
    pub tenant_id: TenantId,
    pub restaurant_id: String,
    /// Account customer, if any (guest orders carry personal data instead)
    pub customer_id: Option<String>,
    pub status: OrderStatus,
    pub delivery_type: Option<DeliveryType>,
    pub delivery_cost: f64,
    /// Sum of line subtotals
    pub overall_sum: f64,
    pub promo_code_id: Option<String>,
    pub promo_discount: f64,
    pub payment_method: Option<PaymentMethod>,
    pub payment_status: PaymentStatus,
    pub tip: f64,
    /// Final payable amount
    pub final_total: f64,
    pub delivery_address: Option<DeliveryAddress>,
    pub personal_data: Option<PersonalData>,
    pub comments: Option<String>,
    /// Requested realization time for scheduled orders
    pub realization_time: Option<DateTime<Utc>>,
    pub source: OrderSource,
    pub table_number: Option<String>,
    /// Whether restaurant staff can see the order right away
    ///
    /// Online-payment orders stay hidden until payment confirmation flips
    /// their status.
    pub is_visible: bool,
    pub lines: Vec<OrderLine>,
    pub created_at: Timestamp,
}
