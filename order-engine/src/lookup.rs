//! Collaborator lookup interfaces
//!
//! The engine consumes catalog, restaurant, and promo-code data through
//! these traits; it never touches storage directly. Every call is scoped by
//! an explicit tenant id — the engine holds no ambient request context.

use shared::models::{AddonGroup, AddonOption, Product, PromoCode, Restaurant};
use shared::types::TenantId;

/// Product catalog resolution
pub trait CatalogLookup {
    fn find_product(&self, tenant: &TenantId, id: &str) -> Option<Product>;
    fn find_addon_group(&self, tenant: &TenantId, id: &str) -> Option<AddonGroup>;
    fn find_addon_option(&self, tenant: &TenantId, id: &str) -> Option<AddonOption>;
}

/// Restaurant resolution, including the ordered delivery-zone list
pub trait RestaurantLookup {
    fn find_restaurant(&self, tenant: &TenantId, id: &str) -> Option<Restaurant>;
}

/// Promo code resolution by code string
///
/// Implementations return the code exactly as stored; the engine applies
/// the active/expiry filter itself so the eligibility semantics live in
/// one place.
pub trait PromoCodeLookup {
    fn find_by_code(&self, tenant: &TenantId, code: &str) -> Option<PromoCode>;
}
