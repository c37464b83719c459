//! Order pricing and delivery-zone resolution engine
//!
//! Given a validated set of purchased items (with selected addons), a
//! fulfillment choice, and an optional promo code, this crate computes
//! line subtotals, zone-based delivery cost (with waivers), promotional
//! discount, tip, and the final payable total, then materializes the
//! result as an immutable [`shared::order::OrderSnapshot`].
//!
//! # Architecture
//!
//! ```text
//! CartInput ──▶ Cart::from_input ──▶ LineItem / AddonSelection
//!                    │                    (catalog validation)
//!                    ├──▶ Delivery  ──▶ ZoneResolver (geometry)
//!                    └──▶ CartPromoCode  (eligibility)
//!                    │
//!               totals pipeline: item_sum → delivery_cost → discount → final_total
//!                    │
//!               Cart::checkout ──▶ OrderStore (atomic write) ──▶ OrderNotifier
//! ```
//!
//! The engine is deliberately synchronous: every operation is a bounded,
//! deterministic computation over in-memory data, and each cart instance is
//! exclusively owned by the request that built it. Persistence, HTTP,
//! payments, and notifications stay behind the collaborator traits in
//! [`lookup`] and [`store`].

pub mod cart;
pub mod config;
pub mod delivery;
pub mod error;
pub mod geo;
pub mod logging;
pub mod lookup;
pub mod money;
pub mod promo;
pub mod store;
pub mod zones;

// Re-exports
pub use cart::{Cart, CartContext, CartInput, CartPolicy, CartTotals, OrderOrigin};
pub use config::EngineConfig;
pub use error::CartError;
pub use promo::{CartPromoCode, PromoCheck, check_code};
pub use store::{OrderNotifier, OrderStore, StoreError};
pub use zones::{DeliveryQuote, ZoneResolver};
