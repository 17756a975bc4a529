//! Integration tests against the sample cart files.

use std::path::{Path, PathBuf};

use cart_core::id::SequentialIdGenerator;
use cart_core::{CartItem, CoreError, Schema, ValidationErrorKind};
use cart_loader::{CartParser, FsReader, LoaderError};
use serde::Deserialize;

fn sample(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("samples")
        .join(name)
}

#[derive(Debug, Deserialize)]
struct ExpectedCart {
    items: Vec<CartItem>,
    total: f64,
}

fn expected_cart() -> ExpectedCart {
    let json = std::fs::read_to_string(sample("cart.json")).unwrap();
    serde_json::from_str(&json).unwrap()
}

// =============================================================================
// parse
// =============================================================================

#[test]
fn parse_returns_items_and_total() {
    let parser = CartParser::new();
    let result = parser.parse(sample("cart.csv")).unwrap();
    let expected = expected_cart();

    assert_eq!(result.item_count(), expected.items.len());
    assert!((result.total() - expected.total).abs() < 1e-9);
    assert_eq!(result.total(), parser.calc_total(result.items()));

    for (parsed, wanted) in result.items().iter().zip(&expected.items) {
        assert_eq!(parsed.name, wanted.name);
        assert_eq!(parsed.price, wanted.price);
        assert_eq!(parsed.quantity, wanted.quantity);
        assert!(!parsed.id.is_empty());
    }
}

#[test]
fn parse_assigns_distinct_ids() {
    let parser = CartParser::with_parts(
        Schema::default(),
        FsReader,
        SequentialIdGenerator::new("line"),
    );
    let result = parser.parse(sample("cart.csv")).unwrap();

    let ids: Vec<&str> = result.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["line-1", "line-2", "line-3", "line-4", "line-5"]);
}

#[test]
fn parse_rejects_non_csv_file() {
    let err = CartParser::new().parse(sample("cart.json")).unwrap_err();
    assert!(matches!(err, LoaderError::ValidationFailed(_)));
}

#[test]
fn parse_rejects_broken_cart_with_all_errors() {
    let err = CartParser::new().parse(sample("broken_cart.csv")).unwrap_err();
    assert_eq!(err.validation_errors().map(|e| e.len()), Some(4));
}

#[test]
fn parse_fails_on_empty_path() {
    let err = CartParser::new().parse("").unwrap_err();
    assert!(matches!(err, LoaderError::EmptyPath));
    assert!(err.is_io());
}

#[test]
fn parse_fails_on_unresolvable_path() {
    let err = CartParser::new().parse("random/path/file.csv").unwrap_err();
    assert!(matches!(err, LoaderError::FileNotFound(_)));
    assert!(err.is_io());
}

#[test]
fn parse_fails_on_empty_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let err = CartParser::new().parse(file.path()).unwrap_err();
    assert!(matches!(err, LoaderError::Core(CoreError::EmptyContent)));
}

// =============================================================================
// read_file
// =============================================================================

#[test]
fn read_file_returns_file_data() {
    let content = CartParser::new().read_file(sample("cart.csv")).unwrap();
    assert!(content.starts_with("Product name,Price,Quantity"));
}

#[test]
fn read_file_fails_on_bad_paths() {
    let parser = CartParser::new();
    assert!(parser.read_file("").unwrap_err().is_io());
    assert!(parser.read_file("random/path/file.csv").unwrap_err().is_io());
}

// =============================================================================
// validate
// =============================================================================

#[test]
fn validate_sample_cart_is_clean() {
    let parser = CartParser::new();
    let content = parser.read_file(sample("cart.csv")).unwrap();
    assert!(parser.validate(&content).unwrap().is_empty());
}

#[test]
fn validate_broken_cart_finds_four_defects() {
    let parser = CartParser::new();
    let content = parser.read_file(sample("broken_cart.csv")).unwrap();
    let errors = parser.validate(&content).unwrap();

    let found: Vec<(ValidationErrorKind, usize, Option<&str>)> = errors
        .iter()
        .map(|e| (e.kind, e.row, e.column.as_deref()))
        .collect();
    assert_eq!(
        found,
        vec![
            (ValidationErrorKind::HeaderMismatch, 0, None),
            (ValidationErrorKind::RowLengthMismatch, 2, None),
            (ValidationErrorKind::CellTypeMismatch, 3, Some("Price")),
            (ValidationErrorKind::CellTypeMismatch, 4, Some("Quantity")),
        ]
    );
}

#[test]
fn validate_empty_content_fails() {
    let err = CartParser::new().validate("").unwrap_err();
    assert!(matches!(err, LoaderError::Core(CoreError::EmptyContent)));
}

#[test]
fn validate_random_content_reports_errors() {
    let errors = CartParser::new().validate("some random content").unwrap();
    assert!(!errors.is_empty());
}

// =============================================================================
// calc_total / parse_line
// =============================================================================

#[test]
fn calc_total_matches_fixture() {
    let expected = expected_cart();
    let total = CartParser::new().calc_total(&expected.items);
    assert!((total - expected.total).abs() < 1e-9);
}

#[test]
fn calc_total_of_nothing_is_zero() {
    assert_eq!(CartParser::new().calc_total(&[]), 0.0);
}

#[test]
fn parse_line_builds_item() {
    let item = CartParser::new()
        .parse_line("Mollis consequat,9.00,2")
        .unwrap();

    assert_eq!(item.name, "Mollis consequat");
    assert_eq!(item.price, 9.0);
    assert_eq!(item.quantity, 2);
    assert_eq!(item.id.len(), 36);
}
