//! Addon group selection for a cart line

use crate::error::CartError;
use crate::lookup::CatalogLookup;
use crate::money::to_decimal;
use rust_decimal::Decimal;
use shared::models::{AddonGroup, AddonOption};
use shared::types::TenantId;

/// One addon group's chosen options for a line item
///
/// The group must belong to the line's product and every option to that
/// exact group; both are checked at construction. Selections keep their
/// input order, and a repeated option id is kept as a separate selection —
/// it counts toward the price again.
#[derive(Debug, Clone)]
pub struct AddonSelection {
    group: AddonGroup,
    options: Vec<AddonOption>,
}

impl AddonSelection {
    pub fn new(
        catalog: &dyn CatalogLookup,
        tenant: &TenantId,
        group_id: &str,
        selection: &[String],
        product_id: &str,
    ) -> Result<Self, CartError> {
        let group = catalog
            .find_addon_group(tenant, group_id)
            .filter(|g| g.product_id == product_id)
            .ok_or_else(|| CartError::InvalidAddonGroup(group_id.to_string()))?;

        let mut options = Vec::with_capacity(selection.len());
        for option_id in selection {
            let option = catalog
                .find_addon_option(tenant, option_id)
                .filter(|o| o.group_id == group.id)
                .ok_or_else(|| CartError::InvalidAddonOption(option_id.clone()))?;
            options.push(option);
        }

        Ok(Self { group, options })
    }

    /// Sum of the selected options' extra prices
    ///
    /// No quantity multiplier at this level — that happens in the line
    /// subtotal.
    pub fn price(&self) -> Decimal {
        self.options
            .iter()
            .map(|option| to_decimal(option.extra_price))
            .sum()
    }

    pub fn group(&self) -> &AddonGroup {
        &self.group
    }

    pub fn options(&self) -> &[AddonOption] {
        &self.options
    }
}
