//! # Cart Schema
//!
//! The expected shape of a cart CSV document.
//!
//! ## Default Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product name,Price,Quantity        ← header (row 0), matched exactly  │
//! │  Mollis consequat,9.00,2            ← row 1                            │
//! │  Tvoluptatem,10.32,1                ← row 2                            │
//! │                                                                         │
//! │  #  Header          Field      Kind                                     │
//! │  0  Product name    name       text                                     │
//! │  1  Price           price      positive_number                          │
//! │  2  Quantity        quantity   positive_integer                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A schema is an immutable value. Components that need one (validator, line
//! parser, loader) are handed it explicitly.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Cart Field
// =============================================================================

/// The `CartItem` field a column feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartField {
    Name,
    Price,
    Quantity,
}

impl CartField {
    pub const fn as_str(&self) -> &'static str {
        match self {
            CartField::Name => "name",
            CartField::Price => "price",
            CartField::Quantity => "quantity",
        }
    }

    /// Whether a column of `kind` can feed this field.
    ///
    /// A validated cell must convert and stay positive, so `name` needs
    /// text, `price` a positive numeric kind, and `quantity` a positive
    /// integer. `non_negative_integer` is for unmapped columns only.
    pub const fn accepts_kind(&self, kind: ColumnKind) -> bool {
        match self {
            CartField::Name => matches!(kind, ColumnKind::Text),
            CartField::Price => matches!(
                kind,
                ColumnKind::PositiveNumber | ColumnKind::PositiveInteger
            ),
            CartField::Quantity => matches!(kind, ColumnKind::PositiveInteger),
        }
    }
}

// =============================================================================
// Column Kind
// =============================================================================

/// What a cell's value must look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Any non-empty text after trimming.
    Text,
    /// Whole number, zero allowed.
    NonNegativeInteger,
    /// Whole number greater than zero.
    PositiveInteger,
    /// Finite decimal number greater than zero.
    PositiveNumber,
}

impl ColumnKind {
    /// Checks a raw cell value against this kind.
    ///
    /// Surrounding whitespace is ignored. Integer kinds are bounded by `u32`,
    /// the type quantities are stored in.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::schema::ColumnKind;
    ///
    /// assert!(ColumnKind::PositiveNumber.accepts(" 9.00 "));
    /// assert!(!ColumnKind::PositiveNumber.accepts("0"));
    /// assert!(ColumnKind::NonNegativeInteger.accepts("0"));
    /// assert!(!ColumnKind::PositiveInteger.accepts("2.5"));
    /// ```
    pub fn accepts(&self, raw: &str) -> bool {
        let value = raw.trim();
        match self {
            ColumnKind::Text => !value.is_empty(),
            ColumnKind::NonNegativeInteger => value.parse::<u32>().is_ok(),
            ColumnKind::PositiveInteger => value.parse::<u32>().map_or(false, |n| n > 0),
            ColumnKind::PositiveNumber => value
                .parse::<f64>()
                .map_or(false, |n| n.is_finite() && n > 0.0),
        }
    }

    /// Human-readable description used in validation messages.
    pub const fn describe(&self) -> &'static str {
        match self {
            ColumnKind::Text => "a nonempty string",
            ColumnKind::NonNegativeInteger => "a non-negative integer",
            ColumnKind::PositiveInteger => "a positive integer",
            ColumnKind::PositiveNumber => "a positive number",
        }
    }
}

// =============================================================================
// Column Definition
// =============================================================================

/// One column of the expected document.
///
/// Columns without a `field` are still validated but don't end up in the
/// parsed cart item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Header text, matched exactly (case-sensitive).
    pub name: String,

    /// Cart item field this column feeds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<CartField>,

    /// Expected value kind.
    pub kind: ColumnKind,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, field: Option<CartField>, kind: ColumnKind) -> Self {
        ColumnDef {
            name: name.into(),
            field,
            kind,
        }
    }
}

// =============================================================================
// Schema
// =============================================================================

/// Cell positions of the fields a cart item is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPositions {
    pub name: usize,
    pub price: usize,
    pub quantity: usize,
}

/// The expected document shape: an ordered list of columns.
///
/// ## Invariants
/// - At least one column
/// - Header names are non-empty, unique, and contain no commas
/// - `name`, `price` and `quantity` are each fed by exactly one column
/// - Each field's column kind always converts (see [`CartField::accepts_kind`])
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    columns: Vec<ColumnDef>,
    #[serde(skip)]
    positions: FieldPositions,
}

impl Schema {
    /// Builds a schema, checking the invariants above.
    pub fn new(columns: Vec<ColumnDef>) -> CoreResult<Self> {
        if columns.is_empty() {
            return Err(CoreError::invalid_schema("schema has no columns"));
        }

        let mut seen = HashSet::new();
        for column in &columns {
            if column.name.trim().is_empty() {
                return Err(CoreError::invalid_schema("column name is empty"));
            }
            if column.name.contains(',') {
                return Err(CoreError::invalid_schema(format!(
                    "column name '{}' contains a comma",
                    column.name
                )));
            }
            if !seen.insert(column.name.as_str()) {
                return Err(CoreError::invalid_schema(format!(
                    "duplicate column '{}'",
                    column.name
                )));
            }
            if let Some(field) = column.field {
                if !field.accepts_kind(column.kind) {
                    return Err(CoreError::invalid_schema(format!(
                        "column '{}' of kind {:?} cannot feed field '{}'",
                        column.name,
                        column.kind,
                        field.as_str()
                    )));
                }
            }
        }

        let position = |field: CartField| -> CoreResult<usize> {
            let mut matching = columns
                .iter()
                .enumerate()
                .filter(|(_, c)| c.field == Some(field))
                .map(|(i, _)| i);
            match (matching.next(), matching.next()) {
                (Some(index), None) => Ok(index),
                (None, _) => Err(CoreError::invalid_schema(format!(
                    "no column feeds field '{}'",
                    field.as_str()
                ))),
                (Some(_), Some(_)) => Err(CoreError::invalid_schema(format!(
                    "more than one column feeds field '{}'",
                    field.as_str()
                ))),
            }
        };

        let positions = FieldPositions {
            name: position(CartField::Name)?,
            price: position(CartField::Price)?,
            quantity: position(CartField::Quantity)?,
        };

        Ok(Schema { columns, positions })
    }

    /// The column definitions, in document order.
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Number of cells every data row must have.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always false for a constructed schema.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Header names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// The exact header line a conforming document starts with.
    pub fn header_line(&self) -> String {
        self.column_names().collect::<Vec<_>>().join(",")
    }

    /// Index of the column that feeds `field`.
    pub fn position_of(&self, field: CartField) -> usize {
        match field {
            CartField::Name => self.positions.name,
            CartField::Price => self.positions.price,
            CartField::Quantity => self.positions.quantity,
        }
    }

    pub fn field_positions(&self) -> FieldPositions {
        self.positions
    }
}

impl Default for Schema {
    /// `Product name,Price,Quantity`.
    fn default() -> Self {
        Schema {
            columns: vec![
                ColumnDef::new("Product name", Some(CartField::Name), ColumnKind::Text),
                ColumnDef::new("Price", Some(CartField::Price), ColumnKind::PositiveNumber),
                ColumnDef::new(
                    "Quantity",
                    Some(CartField::Quantity),
                    ColumnKind::PositiveInteger,
                ),
            ],
            positions: FieldPositions {
                name: 0,
                price: 1,
                quantity: 2,
            },
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
