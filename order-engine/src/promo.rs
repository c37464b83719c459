//! Promo code eligibility and discount computation

use crate::error::CartError;
use crate::lookup::PromoCodeLookup;
use crate::money::{to_decimal, to_f64};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{Customer, PromoCode, PromoCodeType};
use shared::types::TenantId;

/// The promo code accepted into a cart, if any
///
/// Construction runs the full eligibility check, so a code held here has
/// already passed it. Strict mode surfaces failures as errors; lenient mode
/// drops the code instead — a stale code never blocks checkout, only its
/// benefit is forfeited.
#[derive(Debug, Clone, Default)]
pub struct CartPromoCode {
    code: Option<PromoCode>,
}

impl CartPromoCode {
    /// A cart slot with no code attached
    pub fn none() -> Self {
        Self { code: None }
    }

    /// Look up and validate `code_value` for the given customer and item sum
    pub fn evaluate(
        lookup: &dyn PromoCodeLookup,
        tenant: &TenantId,
        code_value: &str,
        item_sum: f64,
        customer: Option<&Customer>,
        strict: bool,
        now: DateTime<Utc>,
    ) -> Result<Self, CartError> {
        let found = lookup
            .find_by_code(tenant, code_value)
            .filter(|code| code.is_redeemable_at(now));

        let Some(code) = found else {
            if strict {
                return Err(CartError::PromoCodeNotFound(code_value.to_string()));
            }
            tracing::debug!(code = %code_value, "Promo code not found or inactive, dropping");
            return Ok(Self::none());
        };

        if let Err(reason) = eligibility(&code, item_sum, customer) {
            if strict {
                return Err(CartError::PromoCodeIneligible(reason));
            }
            tracing::debug!(code = %code.code, %reason, "Promo code ineligible, dropping");
            return Ok(Self::none());
        }

        Ok(Self { code: Some(code) })
    }

    /// Discount against the item sum, unrounded
    ///
    /// Free-delivery codes contribute nothing here; their entire effect is
    /// the delivery-cost waiver.
    pub fn discount(&self, item_sum: f64) -> Decimal {
        let Some(code) = &self.code else {
            return Decimal::ZERO;
        };
        match code.kind {
            PromoCodeType::DiscountPercent => {
                to_decimal(item_sum) * to_decimal(code.amount) / Decimal::ONE_HUNDRED
            }
            PromoCodeType::DiscountValue => to_decimal(code.amount),
            PromoCodeType::FreeDelivery => Decimal::ZERO,
        }
    }

    pub fn has_free_delivery(&self) -> bool {
        self.code
            .as_ref()
            .is_some_and(|code| code.kind == PromoCodeType::FreeDelivery)
    }

    pub fn code(&self) -> Option<&PromoCode> {
        self.code.as_ref()
    }

    pub fn is_accepted(&self) -> bool {
        self.code.is_some()
    }
}

/// All eligibility rules; returns the failing rule's description
///
/// Rules, in order: customer restriction, repeat-use restriction, usage
/// limit (0 = unlimited), minimum order amount.
fn eligibility(code: &PromoCode, item_sum: f64, customer: Option<&Customer>) -> Result<(), String> {
    if let Some(owner) = &code.connected_customer_id {
        if customer.map(|c| c.id.as_str()) != Some(owner.as_str()) {
            return Err("code is restricted to another customer".to_string());
        }
    }

    if !code.can_use_multiple_times && customer.is_some_and(|c| c.has_used_code(&code.id)) {
        return Err("code was already used by this customer".to_string());
    }

    if code.usage_limit != 0 && code.usages >= code.usage_limit {
        return Err("code usage limit reached".to_string());
    }

    if item_sum < code.min_order_amount {
        return Err(format!(
            "order total below the code minimum of {:.2}",
            code.min_order_amount
        ));
    }

    Ok(())
}

/// Outcome of a standalone promo-code check
#[derive(Debug, Clone, Serialize)]
pub struct PromoCheck {
    pub eligible: bool,
    /// Discount the code would grant at this item sum, rounded
    pub discount: f64,
    pub free_delivery: bool,
    /// Why the code cannot be used, when ineligible
    pub reason: Option<String>,
}

/// Validate a code against an item sum and customer without building a cart
///
/// Pre-checkout preview surface: the client shows the would-be discount (or
/// the reason the code is unusable) while the customer is still editing the
/// cart.
pub fn check_code(
    lookup: &dyn PromoCodeLookup,
    tenant: &TenantId,
    code_value: &str,
    item_sum: f64,
    customer: Option<&Customer>,
    now: DateTime<Utc>,
) -> PromoCheck {
    let found = lookup
        .find_by_code(tenant, code_value)
        .filter(|code| code.is_redeemable_at(now));

    let Some(code) = found else {
        return PromoCheck {
            eligible: false,
            discount: 0.0,
            free_delivery: false,
            reason: Some("code not found or no longer active".to_string()),
        };
    };

    match eligibility(&code, item_sum, customer) {
        Ok(()) => {
            let accepted = CartPromoCode { code: Some(code) };
            PromoCheck {
                eligible: true,
                discount: to_f64(accepted.discount(item_sum)),
                free_delivery: accepted.has_free_delivery(),
                reason: None,
            }
        }
        Err(reason) => PromoCheck {
            eligible: false,
            discount: 0.0,
            free_delivery: false,
            reason: Some(reason),
        },
    }
}
