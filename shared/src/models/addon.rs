//! Addon Group and Addon Option Models

use serde::{Deserialize, Serialize};

/// Addon group entity
///
/// A named set of optional modifiers a product offers (e.g. toppings).
/// Groups belong to exactly one product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddonGroup {
    pub id: String,
    /// Owning product reference (String ID)
    pub product_id: String,
    pub name: String,
}

/// Addon option entity (one selectable modifier within a group)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddonOption {
    pub id: String,
    /// Owning group reference (String ID)
    pub group_id: String,
    pub name: String,
    /// Extra price added once per selection
    pub extra_price: f64,
}
