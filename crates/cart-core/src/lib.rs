//! # cart-core: Pure Parsing Logic for Cart CSVs
//!
//! This crate validates shopping-cart CSV text and turns it into typed items
//! with a total. It has zero I/O dependencies; reading files is the job of
//! `cart-loader`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Parser Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 cart-loader (I/O + orchestration)               │   │
//! │  │      read_file ──► validate ──► parse_line* ──► calc_total      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cart-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  schema   │  │validation │  │  parser   │  │   total   │  │   │
//! │  │   │  Schema   │  │ Validator │  │LineParser │  │calc_total │  │   │
//! │  │   │ ColumnDef │  │   rows    │  │ CartItem  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`schema`] - Expected columns and their value kinds
//! - [`records`] - CSV record reading shared by every operation
//! - [`validation`] - Document validation, reporting every defect
//! - [`parser`] - Line → `CartItem` conversion
//! - [`total`] - Cart total aggregation
//! - [`id`] - Pluggable item id generation
//! - [`types`] - `CartItem` and `ParseResult`
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cart_core::id::UuidGenerator;
//! use cart_core::{records, LineParser, ParseResult, Schema, Validator};
//!
//! let content = "Product name,Price,Quantity\nMollis consequat,9.00,2\nTvoluptatem,10.32,1\n";
//! let schema = Schema::default();
//!
//! let errors = Validator::new(&schema).validate(content).unwrap();
//! assert!(errors.is_empty());
//!
//! let parser = LineParser::new(&schema, UuidGenerator);
//! let items = records::data_rows(content)
//!     .unwrap()
//!     .iter()
//!     .map(|row| parser.parse_record(&row.cells))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! let cart = ParseResult::new(items);
//! assert!((cart.total() - 28.32).abs() < 1e-9);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod id;
pub mod parser;
pub mod records;
pub mod schema;
pub mod total;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError, ValidationErrorKind};
pub use id::IdGenerator;
pub use parser::LineParser;
pub use records::CsvRow;
pub use schema::{CartField, ColumnDef, ColumnKind, Schema};
pub use total::calc_total;
pub use types::{CartItem, ParseResult};
pub use validation::{validate, Validator};
