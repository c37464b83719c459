//! Restaurant Model

use super::DeliveryZone;
use serde::{Deserialize, Serialize};

/// Restaurant entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    /// Ordered zone list — position is resolution priority
    #[serde(default)]
    pub delivery_zones: Vec<DeliveryZone>,
}
