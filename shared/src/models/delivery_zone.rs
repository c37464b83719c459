//! Delivery Zone Model

use serde::{Deserialize, Serialize};

/// Geographic point in signed decimal degrees
///
/// An order with no known coordinates is represented as an absent point,
/// never as (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Zone shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZoneShape {
    /// Circle: center point + radius in meters
    Circle { center: GeoPoint, radius_m: f64 },
    /// Polygon: ordered vertex sequence (>= 3 points, degrees)
    Polygon { points: Vec<GeoPoint> },
}

/// Delivery zone entity
///
/// Zones belong to exactly one restaurant. The restaurant's zone order is
/// significant: the first active zone containing a point wins, regardless
/// of which zone is geometrically smaller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryZone {
    pub id: String,
    pub name: String,
    pub shape: ZoneShape,
    pub is_active: bool,
    /// Delivery cost charged for orders inside this zone
    pub delivery_cost: f64,
    /// Minimum item sum required to order at all (0 = none)
    pub min_order_amount: f64,
    /// Item-sum threshold at which delivery becomes free (None = never)
    pub min_order_for_free_delivery: Option<f64>,
}
