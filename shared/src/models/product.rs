//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
///
/// A catalog item customers can order. Prices are in currency units
/// (e.g. 12.50); addon extras live on [`super::AddonOption`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Base unit price
    pub price: f64,
    /// Category reference (String ID)
    pub category: Option<String>,
    pub is_active: bool,
}
