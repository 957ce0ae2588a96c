//! Shopping Cart Business Logic Helpers
//!
//! Small, pure functions used across the cart domain. Keeping them separated
//! from the data models makes them easy to test in isolation.

use super::models::LineItem;

/// Rounds a monetary amount to two decimal places using standard rounding.
///
/// Totals are accumulated as `f64` and only rounded at the edge, so cent
/// rounding lives in exactly one place.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Produces a human-readable one-line summary for a list of cart items.
///
/// Example output: `"2x Apple, 1x Banana"`.
pub fn format_item_summary(items: &[LineItem]) -> String {
    items
        .iter()
        .map(|item| format!("{}x {}", item.quantity, item.name))
        .collect::<Vec<_>>()
        .join(", ")
}
