//! # Cart Totals
//!
//! Aggregation over parsed cart items.

use crate::types::CartItem;

/// Sums the extended price (price × quantity) of every item.
///
/// Returns exactly `0.0` for an empty slice.
///
/// ## Example
/// ```rust
/// use cart_core::{calc_total, CartItem};
///
/// let items = vec![CartItem {
///     id: "1".to_string(),
///     name: "Mollis consequat".to_string(),
///     price: 9.0,
///     quantity: 2,
/// }];
/// assert_eq!(calc_total(&items), 18.0);
/// assert_eq!(calc_total(&[]), 0.0);
/// ```
pub fn calc_total(items: &[CartItem]) -> f64 {
    // Explicit fold: `Sum for f64` starts from -0.0 on recent toolchains.
    items
        .iter()
        .fold(0.0, |total, item| total + item.line_total())
}
