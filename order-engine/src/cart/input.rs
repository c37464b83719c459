//! Raw cart input as supplied by the transport layer
//!
//! Shape/auth validation happens upstream; the cart enforces the catalog
//! and pricing invariants itself when it consumes this payload.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use shared::order::{DeliveryAddress, PersonalData};

/// One addon group selection within an item
#[derive(Debug, Clone, Deserialize)]
pub struct AddonGroupInput {
    /// Addon group id
    pub id: String,
    /// Selected option ids; a repeated id counts every time it appears
    #[serde(default)]
    pub selection: Vec<String>,
}

/// One purchased product
#[derive(Debug, Clone, Deserialize)]
pub struct CartItemInput {
    /// Product id
    pub id: String,
    pub quantity: i64,
    #[serde(default)]
    pub addon_groups: Vec<AddonGroupInput>,
}

/// Full cart payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CartInput {
    /// Restaurant id
    pub restaurant: String,
    #[serde(default)]
    pub items: Vec<CartItemInput>,
    /// Fulfillment type tag ("delivery", "own_pickup", ...)
    pub delivery_type: Option<String>,
    pub delivery_address: Option<DeliveryAddress>,
    /// Promo code string
    pub promo_code: Option<String>,
    /// Payment method tag ("cash", "online_payment", ...)
    pub payment_method: Option<String>,
    #[serde(default)]
    pub tip: f64,
    pub comments: Option<String>,
    /// Requested realization time for scheduled orders
    pub realization_time: Option<DateTime<Utc>>,
    /// Source channel tag ("mobile", "web")
    pub source: Option<String>,
    /// Table/session identifier for in-venue orders
    pub table: Option<String>,
    /// Guest contact data for orders without an account
    pub personal_data: Option<PersonalData>,
}
