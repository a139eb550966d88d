//! Money calculation utilities using rust_decimal for precision
//!
//! Prices travel as `f64` in the upstream JSON, so every arithmetic step
//! goes through `Decimal` and is only converted back at the edge.
//! Rounding is 2 decimal places, half away from zero.

use rust_decimal::prelude::*;

use crate::order::CartItem;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Per-unit price of a cart line: menu price plus all selected add-ons
pub fn item_unit_price(item: &CartItem) -> Decimal {
    let add_ons: Decimal = item
        .selected_add_ons
        .iter()
        .map(|a| to_decimal(a.price))
        .sum();
    to_decimal(item.menu_item.price) + add_ons
}

/// Line total: `(unit price + add-ons) * quantity`
pub fn item_line_total(item: &CartItem) -> Decimal {
    let total = item_unit_price(item) * Decimal::from(item.quantity);
    total.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Sum of line totals over a list of cart lines
///
/// Always recomputed from the lines; callers must not cache the result.
pub fn items_total(items: &[CartItem]) -> Decimal {
    items.iter().map(item_line_total).sum()
}
