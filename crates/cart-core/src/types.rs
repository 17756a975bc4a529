//! # Domain Types
//!
//! The values a parsed cart is made of.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────────┐        ┌─────────────────┐                │
//! │  │      ParseResult        │        │    CartItem     │                │
//! │  │  ─────────────────────  │ 1    * │  ─────────────  │                │
//! │  │  items ─────────────────┼───────►│  id (UUID)      │                │
//! │  │  total (derived)        │        │  name           │                │
//! │  └─────────────────────────┘        │  price (> 0)    │                │
//! │                                     │  quantity (> 0) │                │
//! │                                     └─────────────────┘                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::total::calc_total;

// =============================================================================
// Cart Item
// =============================================================================

/// One line of a parsed cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Generated identifier, unique within the process.
    pub id: String,

    /// Product name, trimmed.
    pub name: String,

    /// Unit price.
    pub price: f64,

    /// Number of units.
    pub quantity: u32,
}

impl CartItem {
    /// Extended price (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

// =============================================================================
// Parse Result
// =============================================================================

/// A parsed cart: its items and their total.
///
/// The total is computed once from the items when the result is built, and
/// the fields are private so the two can't drift apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult {
    items: Vec<CartItem>,
    total: f64,
}

impl ParseResult {
    pub fn new(items: Vec<CartItem>) -> Self {
        let total = calc_total(&items);
        ParseResult { items, total }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// Number of line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities over all items.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
