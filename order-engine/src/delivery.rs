//! Fulfillment selection and base delivery cost

use crate::error::CartError;
use crate::zones::ZoneResolver;
use shared::models::{GeoPoint, Restaurant};
use shared::order::{DeliveryAddress, DeliveryType};

/// Fulfillment selection for a cart: type plus optional address
///
/// Strict mode (customer web/app orders) rejects unknown types and missing
/// addresses up front. Lenient mode (staff point-of-sale flows) trusts the
/// in-venue context and keeps whatever was supplied — an absent type then
/// simply prices like an out-of-zone delivery.
#[derive(Debug, Clone)]
pub struct Delivery {
    delivery_type: Option<DeliveryType>,
    address: Option<DeliveryAddress>,
}

impl Delivery {
    /// Parse and validate the fulfillment selection
    pub fn new(
        type_tag: Option<&str>,
        address: Option<DeliveryAddress>,
        strict: bool,
    ) -> Result<Self, CartError> {
        let delivery_type = match type_tag {
            Some(tag) => {
                let parsed = DeliveryType::from_tag(tag);
                if strict && parsed.is_none() {
                    return Err(CartError::InvalidDeliveryType(Some(tag.to_string())));
                }
                parsed
            }
            None if strict => return Err(CartError::InvalidDeliveryType(None)),
            None => None,
        };

        let delivery = Self {
            delivery_type,
            address,
        };

        if strict && delivery.requires_address() && delivery.address.is_none() {
            return Err(CartError::InvalidDeliveryAddress);
        }

        Ok(delivery)
    }

    /// Orders realized on premises or picked up need no address
    fn requires_address(&self) -> bool {
        !(self.is_own_pickup() || self.is_dine_in() || self.is_table_order())
    }

    pub fn is_own_pickup(&self) -> bool {
        self.delivery_type == Some(DeliveryType::OwnPickup)
    }

    pub fn is_dine_in(&self) -> bool {
        self.delivery_type == Some(DeliveryType::DineIn)
    }

    pub fn is_table_order(&self) -> bool {
        self.delivery_type == Some(DeliveryType::TableOrder)
    }

    pub fn delivery_type(&self) -> Option<DeliveryType> {
        self.delivery_type
    }

    pub fn address(&self) -> Option<&DeliveryAddress> {
        self.address.as_ref()
    }

    /// Coordinates of the delivery address, when known
    pub fn location(&self) -> Option<GeoPoint> {
        self.address.as_ref().and_then(|a| a.location)
    }

    /// Base delivery cost before waivers
    ///
    /// Pickup costs nothing. Otherwise the resolved zone's configured cost
    /// applies; an address outside every active zone (or with no known
    /// coordinates) costs nothing by policy.
    pub fn cost(&self, restaurant: &Restaurant) -> f64 {
        if self.is_own_pickup() {
            return 0.0;
        }
        match ZoneResolver::resolve(restaurant, self.location()) {
            Some(zone) => zone.delivery_cost,
            None => 0.0,
        }
    }

    /// Whether the resolved zone's free-delivery threshold is met
    pub fn is_free_delivery_for_min_order(&self, restaurant: &Restaurant, item_sum: f64) -> bool {
        ZoneResolver::resolve(restaurant, self.location()).is_some_and(|zone| {
            zone.min_order_for_free_delivery
                .is_some_and(|min| item_sum >= min)
        })
    }
}
