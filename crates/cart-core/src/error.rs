//! # Error Types
//!
//! Domain-specific error types for cart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cart-core errors (this file)                                          │
//! │  ├── CoreError        - Failures that abort an operation               │
//! │  └── ValidationError  - One defect found in a CSV document             │
//! │                                                                         │
//! │  cart-loader errors (separate crate)                                   │
//! │  └── LoaderError      - I/O, config, and rejected documents            │
//! │                                                                         │
//! │  Flow: Vec<ValidationError> → LoaderError::ValidationFailed → caller   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `ValidationError` is a value, not a failure: `validate` returns a list of
//! them and only the loader turns a non-empty list into an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schema::ColumnKind;

// =============================================================================
// Core Error
// =============================================================================

/// Errors that stop a core operation outright.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Content handed to the validator has no text at all.
    ///
    /// ## When This Occurs
    /// - Empty file
    /// - File containing only blank lines
    #[error("CSV content is empty")]
    EmptyContent,

    /// A line could not be converted into a cart item.
    ///
    /// The line parser trusts validated input, so this only shows up when
    /// it's called directly with text that never went through validation.
    #[error("Malformed line \"{line}\": {reason}")]
    MalformedLine { line: String, reason: String },

    /// Schema definition is unusable.
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// The CSV reader gave up on the content.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl CoreError {
    /// Creates a MalformedLine error.
    pub fn malformed_line(line: impl Into<String>, reason: impl Into<String>) -> Self {
        CoreError::MalformedLine {
            line: line.into(),
            reason: reason.into(),
        }
    }

    /// Creates an InvalidSchema error.
    pub fn invalid_schema(reason: impl Into<String>) -> Self {
        CoreError::InvalidSchema(reason.into())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// The category of a document defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationErrorKind {
    /// Header line doesn't match the schema's column names.
    HeaderMismatch,
    /// A data row has the wrong number of cells.
    RowLengthMismatch,
    /// A cell's value doesn't fit its column kind.
    CellTypeMismatch,
}

/// One defect found while validating a CSV document.
///
/// ## Row Numbering
/// `row` is the physical line index in the document: the header is row 0,
/// the first line after it is row 1. Blank lines are skipped by the
/// validator but still advance the count.
///
/// ## Column
/// Only cell errors name a column. Header and row-length errors describe the
/// whole line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("row {row}: {message}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub row: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    pub message: String,
}

impl ValidationError {
    /// Creates a HeaderMismatch error. Always reported on row 0.
    pub fn header_mismatch(expected: &str, received: &str) -> Self {
        ValidationError {
            kind: ValidationErrorKind::HeaderMismatch,
            row: 0,
            column: None,
            message: format!(
                "Expected header to be \"{}\" but received \"{}\".",
                expected, received
            ),
        }
    }

    /// Creates a RowLengthMismatch error.
    pub fn row_length_mismatch(row: usize, expected: usize, received: usize) -> Self {
        ValidationError {
            kind: ValidationErrorKind::RowLengthMismatch,
            row,
            column: None,
            message: format!(
                "Expected row to have {} cells but received {}.",
                expected, received
            ),
        }
    }

    /// Creates a CellTypeMismatch error for `value` in `column`.
    pub fn cell_type_mismatch(
        row: usize,
        column: impl Into<String>,
        kind: ColumnKind,
        value: &str,
    ) -> Self {
        ValidationError {
            kind: ValidationErrorKind::CellTypeMismatch,
            row,
            column: Some(column.into()),
            message: format!(
                "Expected cell to be {} but received \"{}\".",
                kind.describe(),
                value
            ),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::malformed_line("Widget,abc,2", "price is not a number");
        assert_eq!(
            err.to_string(),
            "Malformed line \"Widget,abc,2\": price is not a number"
        );
        assert_eq!(CoreError::EmptyContent.to_string(), "CSV content is empty");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::row_length_mismatch(3, 3, 2);
        assert_eq!(err.kind, ValidationErrorKind::RowLengthMismatch);
        assert_eq!(err.column, None);
        assert_eq!(
            err.to_string(),
            "row 3: Expected row to have 3 cells but received 2."
        );

        let err = ValidationError::cell_type_mismatch(2, "Price", ColumnKind::PositiveNumber, "abc");
        assert_eq!(err.column.as_deref(), Some("Price"));
        assert_eq!(
            err.message,
            "Expected cell to be a positive number but received \"abc\"."
        );
    }

    #[test]
    fn test_validation_error_kind_serializes_as_screaming_snake_case() {
        let err = ValidationError::header_mismatch("Product name,Price,Quantity", "Price");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "HEADER_MISMATCH");
        assert_eq!(json["row"], 0);
        assert!(json.get("column").is_none());
    }
}
