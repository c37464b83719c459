//! Domain models
//!
//! Read-only entities the pricing engine consumes from its collaborators.

mod addon;
mod customer;
mod delivery_zone;
mod product;
mod promo_code;
mod restaurant;

pub use addon::{AddonGroup, AddonOption};
pub use customer::Customer;
pub use delivery_zone::{DeliveryZone, GeoPoint, ZoneShape};
pub use product::Product;
pub use promo_code::{PromoCode, PromoCodeType};
pub use restaurant::Restaurant;
