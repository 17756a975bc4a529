//! # Validation Module
//!
//! Checks raw cart CSV text against a [`Schema`] and reports every defect.
//!
//! ## Validation Pass
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      One Pass, All Defects                              │
//! │                                                                         │
//! │  Row 0: header                                                          │
//! │  └── tokens != schema column names? → one HEADER_MISMATCH              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Row 1..n: data rows (blank lines skipped)                             │
//! │  ├── cell count != column count? → one ROW_LENGTH_MISMATCH, next row   │
//! │  └── per cell: kind.accepts(value)? else → CELL_TYPE_MISMATCH          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Vec<ValidationError> in document order (empty = valid)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Malformed content is never an `Err`; it shows up in the returned list.
//! The only failure is content with no text in it at all.
//!
//! ## Usage
//! ```rust
//! use cart_core::{Schema, Validator};
//!
//! let schema = Schema::default();
//! let errors = Validator::new(&schema)
//!     .validate("Product name,Price,Quantity\nMollis consequat,9.00,2\n")
//!     .unwrap();
//! assert!(errors.is_empty());
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::records::{read_rows, CsvRow};
use crate::schema::Schema;

/// Validates CSV documents against one schema.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    schema: &'a Schema,
}

impl<'a> Validator<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Validator { schema }
    }

    /// Validates a whole document.
    ///
    /// ## Returns
    /// - `Ok(vec![])` if the document conforms
    /// - `Ok(errors)` with every defect found, in document order
    /// - `Err(CoreError::EmptyContent)` if there is nothing to validate
    pub fn validate(&self, content: &str) -> CoreResult<Vec<ValidationError>> {
        if content.trim().is_empty() {
            return Err(CoreError::EmptyContent);
        }

        let mut rows = read_rows(content)?.into_iter();
        let mut errors = Vec::new();

        if let Some(header) = rows.next() {
            if let Some(err) = self.check_header(&header) {
                errors.push(err);
            }
        }

        for row in rows {
            self.check_row(&row, &mut errors);
        }

        Ok(errors)
    }

    fn check_header(&self, header: &CsvRow) -> Option<ValidationError> {
        if header.cells.iter().eq(self.schema.column_names()) {
            None
        } else {
            Some(ValidationError::header_mismatch(
                &self.schema.header_line(),
                &header.line(),
            ))
        }
    }

    fn check_row(&self, row: &CsvRow, errors: &mut Vec<ValidationError>) {
        // Cell checks on a short or long row would only repeat the same defect.
        if row.cells.len() != self.schema.len() {
            errors.push(ValidationError::row_length_mismatch(
                row.row,
                self.schema.len(),
                row.cells.len(),
            ));
            return;
        }

        for (column, value) in self.schema.columns().iter().zip(row.cells.iter()) {
            if !column.kind.accepts(value) {
                errors.push(ValidationError::cell_type_mismatch(
                    row.row,
                    column.name.as_str(),
                    column.kind,
                    value,
                ));
            }
        }
    }
}

/// Validates `content` against `schema`. See [`Validator::validate`].
pub fn validate(schema: &Schema, content: &str) -> CoreResult<Vec<ValidationError>> {
    Validator::new(schema).validate(content)
}

// =============================================================================
// Unit Tests
// =============================================================================
