//! Money calculation utilities using rust_decimal for precision
//!
//! All monetary aggregation is done in `Decimal`; models and snapshots
//! store `f64`. Conversion back to `f64` rounds to 2 decimal places (half
//! away from zero) and happens only when a value is reported or stored,
//! never at intermediate steps of a computation.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
///
/// Monetary inputs reach the engine as finite catalog/config values. If a
/// NaN/Infinity somehow gets here, logs an error and returns ZERO to avoid
/// silent corruption in financial calculations.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        // SAFETY: a Decimal rounded to 2dp is always within f64 range
        .expect("Decimal rounded to 2dp is always representable as f64")
}

/// Round an f64 amount to 2 decimal places via Decimal
#[inline]
pub fn round_money(value: f64) -> f64 {
    to_f64(to_decimal(value))
}
