//! Cart line item

use super::AddonSelection;
use super::input::CartItemInput;
use crate::error::CartError;
use crate::lookup::CatalogLookup;
use crate::money::to_decimal;
use rust_decimal::Decimal;
use shared::models::Product;
use shared::types::TenantId;

/// One purchased product with quantity and addon selections
///
/// The product reference must resolve to an existing, purchasable product
/// when the line is built; after that the line owns its own read-only copy.
#[derive(Debug, Clone)]
pub struct LineItem {
    product: Product,
    quantity: u32,
    addon_groups: Vec<AddonSelection>,
}

impl LineItem {
    pub fn new(
        catalog: &dyn CatalogLookup,
        tenant: &TenantId,
        input: &CartItemInput,
    ) -> Result<Self, CartError> {
        let product = catalog
            .find_product(tenant, &input.id)
            .filter(|p| p.is_active)
            .ok_or_else(|| CartError::InvalidProduct(input.id.clone()))?;

        if input.quantity <= 0 {
            return Err(CartError::InvalidQuantity {
                product_id: product.id.clone(),
                quantity: input.quantity,
            });
        }
        let quantity = u32::try_from(input.quantity).map_err(|_| CartError::InvalidQuantity {
            product_id: product.id.clone(),
            quantity: input.quantity,
        })?;

        let mut addon_groups = Vec::with_capacity(input.addon_groups.len());
        for group_input in &input.addon_groups {
            addon_groups.push(AddonSelection::new(
                catalog,
                tenant,
                &group_input.id,
                &group_input.selection,
                &product.id,
            )?);
        }

        Ok(Self {
            product,
            quantity,
            addon_groups,
        })
    }

    /// quantity x (unit price + addon extras), unrounded
    ///
    /// Pure function of the line's state; the 2-decimal rounding is applied
    /// only at the cart-total level.
    pub fn subtotal(&self) -> Decimal {
        let extras: Decimal = self.addon_groups.iter().map(AddonSelection::price).sum();
        Decimal::from(self.quantity) * (to_decimal(self.product.price) + extras)
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn addon_groups(&self) -> &[AddonSelection] {
        &self.addon_groups
    }
}
