//! Delivery zone resolution

use crate::geo;
use serde::Serialize;
use shared::models::{DeliveryZone, GeoPoint, Restaurant, ZoneShape};

/// Resolves which of a restaurant's delivery zones contains a point
///
/// Zones are checked in their stored order and the first active containing
/// zone wins — overlap is resolved by priority of definition, not by best
/// or smallest fit.
pub struct ZoneResolver;

impl ZoneResolver {
    /// First active zone containing `point`, or `None`
    ///
    /// A missing point fails closed: no zone applies. Callers treat `None`
    /// as "no delivery zone", not as an error.
    pub fn resolve(restaurant: &Restaurant, point: Option<GeoPoint>) -> Option<&DeliveryZone> {
        let point = point?;

        for zone in &restaurant.delivery_zones {
            if zone.is_active && Self::contains(zone, point) {
                tracing::debug!(zone_id = %zone.id, zone = %zone.name, "Delivery zone resolved");
                return Some(zone);
            }
        }

        None
    }

    /// Shape containment for a single zone
    ///
    /// Circle boundaries are inclusive: a point exactly at the radius is in.
    pub fn contains(zone: &DeliveryZone, point: GeoPoint) -> bool {
        match &zone.shape {
            ZoneShape::Circle { center, radius_m } => {
                geo::distance_meters(*center, point) <= *radius_m
            }
            ZoneShape::Polygon { points } => geo::point_in_polygon(point, points),
        }
    }

    /// Whether any active zone covers the point
    pub fn can_deliver(restaurant: &Restaurant, point: GeoPoint) -> bool {
        Self::resolve(restaurant, Some(point)).is_some()
    }

    /// Resolve a point to its zone's pricing data
    ///
    /// Address pre-check surface: lets callers show delivery cost and
    /// minimum-order requirements before a cart exists.
    pub fn quote(restaurant: &Restaurant, point: GeoPoint) -> Option<DeliveryQuote> {
        Self::resolve(restaurant, Some(point)).map(|zone| DeliveryQuote {
            zone_id: zone.id.clone(),
            zone_name: zone.name.clone(),
            delivery_cost: zone.delivery_cost,
            min_order_amount: zone.min_order_amount,
            min_order_for_free_delivery: zone.min_order_for_free_delivery,
        })
    }
}

/// Zone pricing data for a resolved point
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryQuote {
    pub zone_id: String,
    pub zone_name: String,
    pub delivery_cost: f64,
    pub min_order_amount: f64,
    pub min_order_for_free_delivery: Option<f64>,
}
