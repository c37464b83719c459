//! The order cart aggregate and its totals pipeline
//!
//! A cart owns its line items, one fulfillment selection, at most one
//! accepted promo code, and the ancillary order attributes. Every total is
//! a pure function of that owned state, evaluated in a fixed order:
//!
//! 1. `item_sum` — rounded sum of line subtotals
//! 2. `delivery_cost` — zone cost after the waiver chain
//! 3. `discount` — promo discount against the item sum
//! 4. `final_total` — item sum + delivery + tip − discount
//!
//! Nothing is cached, so the accessors can never desync from the cart's
//! inputs; calling them twice without mutation yields identical results.

mod addon_selection;
mod input;
mod line_item;

pub use addon_selection::AddonSelection;
pub use input::{AddonGroupInput, CartInput, CartItemInput};
pub use line_item::LineItem;

use crate::delivery::Delivery;
use crate::error::CartError;
use crate::lookup::{CatalogLookup, PromoCodeLookup, RestaurantLookup};
use crate::money::{round_money, to_decimal, to_f64};
use crate::promo::CartPromoCode;
use crate::store::{OrderNotifier, OrderStore};
use crate::zones::ZoneResolver;
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::models::{Customer, DeliveryZone, Restaurant};
use shared::order::{
    OrderLine, OrderLineAddon, OrderSnapshot, OrderSource, OrderStatus, PaymentMethod,
    PaymentStatus,
};
use shared::types::TenantId;
use uuid::Uuid;

/// Order origin, driving validation posture and checkout defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderOrigin {
    /// Customer-initiated web or app order
    #[default]
    Customer,
    /// Staff-initiated point-of-sale order
    PointOfSale,
}

/// Validation and checkout policy for a cart
///
/// One cart type serves both origins; the policy carries what used to be
/// origin-specific behavior: strictness of input validation and the status
/// and visibility a checked-out order starts with.
#[derive(Debug, Clone, Copy)]
pub struct CartPolicy {
    pub origin: OrderOrigin,
    /// Strict raises on the first invalid input; lenient degrades
    /// gracefully by dropping the offending component
    pub strict: bool,
}

impl CartPolicy {
    /// Customer web/app orders: full validation
    pub fn customer() -> Self {
        Self {
            origin: OrderOrigin::Customer,
            strict: true,
        }
    }

    /// Staff point-of-sale orders: trusted in-venue context
    pub fn point_of_sale() -> Self {
        Self {
            origin: OrderOrigin::PointOfSale,
            strict: false,
        }
    }
}

/// Collaborators a cart needs while it is being built
#[derive(Clone, Copy)]
pub struct CartContext<'a> {
    pub tenant: &'a TenantId,
    pub catalog: &'a dyn CatalogLookup,
    pub restaurants: &'a dyn RestaurantLookup,
    pub promo_codes: &'a dyn PromoCodeLookup,
}

/// All computed totals in one value
///
/// Summary/preview surface for clients that want to render a cart without
/// checking out.
#[derive(Debug, Clone, Serialize)]
pub struct CartTotals {
    pub item_sum: f64,
    pub delivery_cost: f64,
    pub discount: f64,
    pub tip: f64,
    pub final_total: f64,
    pub min_order: f64,
    pub min_order_satisfied: bool,
}

/// The order cart aggregate
#[derive(Debug)]
pub struct Cart {
    tenant: TenantId,
    restaurant: Restaurant,
    items: Vec<LineItem>,
    delivery: Delivery,
    promo: CartPromoCode,
    payment_method: Option<PaymentMethod>,
    tip: f64,
    comments: Option<String>,
    realization_time: Option<DateTime<Utc>>,
    source: OrderSource,
    table: Option<String>,
    personal_data: Option<shared::order::PersonalData>,
    policy: CartPolicy,
}

impl Cart {
    /// Build and validate a cart from raw input
    ///
    /// Fails fast: every catalog, quantity, delivery, and promo check runs
    /// here, before any total can be observed. `customer` is the requesting
    /// account holder, used for promo eligibility; guest orders pass `None`.
    pub fn from_input(
        ctx: CartContext<'_>,
        input: CartInput,
        policy: CartPolicy,
        customer: Option<&Customer>,
        now: DateTime<Utc>,
    ) -> Result<Self, CartError> {
        let restaurant = ctx
            .restaurants
            .find_restaurant(ctx.tenant, &input.restaurant)
            .ok_or_else(|| CartError::RestaurantNotFound(input.restaurant.clone()))?;

        let mut items = Vec::with_capacity(input.items.len());
        for item_input in &input.items {
            items.push(LineItem::new(ctx.catalog, ctx.tenant, item_input)?);
        }

        let delivery = Delivery::new(
            input.delivery_type.as_deref(),
            input.delivery_address,
            policy.strict,
        )?;

        // Promo eligibility runs against the same rounded item sum the
        // totals pipeline reports
        let item_sum = to_f64(items.iter().map(LineItem::subtotal).sum());
        let promo = match &input.promo_code {
            Some(code) => CartPromoCode::evaluate(
                ctx.promo_codes,
                ctx.tenant,
                code,
                item_sum,
                customer,
                policy.strict,
                now,
            )?,
            None => CartPromoCode::none(),
        };

        // Tip invariant: finite and non-negative
        let tip = if input.tip.is_finite() && input.tip > 0.0 {
            round_money(input.tip)
        } else {
            0.0
        };

        let source = match policy.origin {
            OrderOrigin::PointOfSale => OrderSource::Pos,
            OrderOrigin::Customer => input
                .source
                .as_deref()
                .and_then(OrderSource::from_tag)
                .unwrap_or_default(),
        };

        Ok(Self {
            tenant: ctx.tenant.clone(),
            restaurant,
            items,
            delivery,
            promo,
            payment_method: input
                .payment_method
                .as_deref()
                .and_then(PaymentMethod::from_tag),
            tip,
            comments: input.comments,
            realization_time: input.realization_time,
            source,
            table: input.table,
            personal_data: input.personal_data,
            policy,
        })
    }

    // ==================== Totals pipeline ====================

    /// Step 1: rounded sum of line subtotals
    pub fn item_sum(&self) -> f64 {
        to_f64(self.items.iter().map(LineItem::subtotal).sum())
    }

    /// Step 2: delivery cost after waivers
    ///
    /// Waivers apply in this exact order, first match wins:
    /// 1. pickup / table order / dine-in
    /// 2. accepted free-delivery promo code
    /// 3. zone free-delivery threshold met by the item sum
    /// 4. otherwise the zone's configured cost (0 when no zone resolves)
    pub fn delivery_cost(&self) -> f64 {
        if self.delivery.is_own_pickup() || self.delivery.is_table_order() || self.delivery.is_dine_in()
        {
            return 0.0;
        }

        if self.promo.has_free_delivery() {
            return 0.0;
        }

        if self
            .delivery
            .is_free_delivery_for_min_order(&self.restaurant, self.item_sum())
        {
            return 0.0;
        }

        round_money(self.delivery.cost(&self.restaurant))
    }

    /// Step 3: promo discount against the item sum
    pub fn discount(&self) -> f64 {
        to_f64(self.promo.discount(self.item_sum()))
    }

    /// Step 4: final payable total
    pub fn final_total(&self) -> f64 {
        to_f64(
            to_decimal(self.item_sum()) + to_decimal(self.delivery_cost()) + to_decimal(self.tip)
                - to_decimal(self.discount()),
        )
    }

    /// The zone-mandated minimum order amount (0 when no zone applies)
    pub fn min_order(&self) -> f64 {
        self.zone().map_or(0.0, |zone| zone.min_order_amount)
    }

    pub fn min_order_satisfied(&self) -> bool {
        self.item_sum() >= self.min_order()
    }

    /// All computed totals in one value
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            item_sum: self.item_sum(),
            delivery_cost: self.delivery_cost(),
            discount: self.discount(),
            tip: self.tip,
            final_total: self.final_total(),
            min_order: self.min_order(),
            min_order_satisfied: self.min_order_satisfied(),
        }
    }

    // ==================== Accessors ====================

    /// The delivery zone containing the cart's address, if any
    pub fn zone(&self) -> Option<&DeliveryZone> {
        ZoneResolver::resolve(&self.restaurant, self.delivery.location())
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn delivery(&self) -> &Delivery {
        &self.delivery
    }

    pub fn promo(&self) -> &CartPromoCode {
        &self.promo
    }

    pub fn restaurant(&self) -> &Restaurant {
        &self.restaurant
    }

    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.payment_method
    }

    pub fn tip(&self) -> f64 {
        self.tip
    }

    /// Whether payment settles through an online provider before the
    /// restaurant sees the order
    pub fn is_online_payment(&self) -> bool {
        self.payment_method.is_some_and(|m| m.is_online())
    }

    // ==================== Checkout ====================

    /// Materialize the cart as an immutable order snapshot and persist it
    ///
    /// The store write is a single atomic unit; on failure nothing is
    /// retained and the error propagates unchanged. The notifier fires only
    /// for orders that are immediately visible to staff — online-payment
    /// orders wait for the external payment confirmation.
    pub fn checkout(
        &self,
        customer: Option<&Customer>,
        store: &dyn OrderStore,
        notifier: &dyn OrderNotifier,
    ) -> Result<OrderSnapshot, CartError> {
        let snapshot = self.build_snapshot(customer);

        store.create(&snapshot)?;
        tracing::info!(
            order_id = %snapshot.order_id,
            restaurant_id = %snapshot.restaurant_id,
            total = snapshot.final_total,
            visible = snapshot.is_visible,
            "Order stored"
        );

        if snapshot.is_visible {
            notifier.order_placed(&snapshot);
        }

        Ok(snapshot)
    }

    /// Freeze the cart into a snapshot
    fn build_snapshot(&self, customer: Option<&Customer>) -> OrderSnapshot {
        let (status, payment_status, is_visible) = match self.policy.origin {
            // Staff-entered orders are settled on the spot
            OrderOrigin::PointOfSale => (OrderStatus::Accepted, PaymentStatus::Paid, true),
            OrderOrigin::Customer if self.is_online_payment() => {
                (OrderStatus::WaitingForPayment, PaymentStatus::NotPaid, false)
            }
            OrderOrigin::Customer => (OrderStatus::New, PaymentStatus::NotPaid, true),
        };

        let lines = self
            .items
            .iter()
            .map(|item| OrderLine {
                product_id: item.product().id.clone(),
                name: item.product().name.clone(),
                description: item.product().description.clone(),
                quantity: item.quantity(),
                subtotal: to_f64(item.subtotal()),
                addons: item
                    .addon_groups()
                    .iter()
                    .flat_map(|selection| {
                        selection.options().iter().map(move |option| OrderLineAddon {
                            group_id: selection.group().id.clone(),
                            option_id: option.id.clone(),
                            group_name: selection.group().name.clone(),
                            option_name: option.name.clone(),
                            extra_price: option.extra_price,
                            quantity: 1,
                        })
                    })
                    .collect(),
            })
            .collect();

        OrderSnapshot {
            order_id: Uuid::new_v4().to_string(),
            tenant_id: self.tenant.clone(),
            restaurant_id: self.restaurant.id.clone(),
            customer_id: customer.map(|c| c.id.clone()),
            status,
            delivery_type: self.delivery.delivery_type(),
            delivery_cost: self.delivery_cost(),
            overall_sum: self.item_sum(),
            promo_code_id: self.promo.code().map(|c| c.id.clone()),
            promo_discount: self.discount(),
            payment_method: self.payment_method,
            payment_status,
            tip: self.tip,
            final_total: self.final_total(),
            delivery_address: self.delivery.address().cloned(),
            personal_data: self.personal_data.clone(),
            comments: self.comments.clone(),
            realization_time: self.realization_time,
            source: self.source,
            table_number: self.table.clone(),
            is_visible,
            lines,
            created_at: Utc::now().timestamp_millis(),
        }
    }
}
