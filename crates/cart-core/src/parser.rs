//! # Line Parser
//!
//! Turns one CSV data line into a [`CartItem`].
//!
//! The parser trusts its input: it does no schema checks (empty names,
//! negative prices and zero quantities all pass through) and expects
//! [`Validator`](crate::validation::Validator) to have run first. It only
//! fails when a line can't be converted at all.

use csv::StringRecord;

use crate::error::{CoreError, CoreResult};
use crate::id::IdGenerator;
use crate::records::read_rows;
use crate::schema::{CartField, Schema};
use crate::types::CartItem;

/// Converts data lines into cart items, giving each a fresh id.
///
/// ## Example
/// ```rust
/// use cart_core::{LineParser, Schema};
/// use cart_core::id::SequentialIdGenerator;
///
/// let schema = Schema::default();
/// let parser = LineParser::new(&schema, SequentialIdGenerator::new("item"));
///
/// let item = parser.parse_line("Mollis consequat,9.00,2").unwrap();
/// assert_eq!(item.id, "item-1");
/// assert_eq!(item.name, "Mollis consequat");
/// assert_eq!(item.price, 9.0);
/// assert_eq!(item.quantity, 2);
/// ```
#[derive(Debug)]
pub struct LineParser<'a, G> {
    schema: &'a Schema,
    ids: G,
}

impl<'a, G: IdGenerator> LineParser<'a, G> {
    pub fn new(schema: &'a Schema, ids: G) -> Self {
        LineParser { schema, ids }
    }

    /// Parses one line positionally according to the schema's field mapping.
    ///
    /// The line is split by the same reader as whole documents, see
    /// [`records`](crate::records).
    pub fn parse_line(&self, line: &str) -> CoreResult<CartItem> {
        let row = read_rows(line)?
            .into_iter()
            .next()
            .ok_or_else(|| CoreError::malformed_line(line, "empty line"))?;

        self.parse_record(&row.cells)
    }

    /// Parses an already split record.
    pub fn parse_record(&self, cells: &StringRecord) -> CoreResult<CartItem> {
        let positions = self.schema.field_positions();
        let malformed = |reason: String| {
            let line = cells.iter().collect::<Vec<_>>().join(",");
            CoreError::malformed_line(line, reason)
        };

        let cell = |index: usize, field: CartField| {
            cells
                .get(index)
                .map(str::trim)
                .ok_or_else(|| malformed(format!("missing {} cell", field.as_str())))
        };

        let name = cell(positions.name, CartField::Name)?.to_string();

        let price = cell(positions.price, CartField::Price)?
            .parse::<f64>()
            .map_err(|e| malformed(format!("price: {}", e)))?;

        let quantity = cell(positions.quantity, CartField::Quantity)?
            .parse::<u32>()
            .map_err(|e| malformed(format!("quantity: {}", e)))?;

        Ok(CartItem {
            id: self.ids.next_id(),
            name,
            price,
            quantity,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{SequentialIdGenerator, UuidGenerator};
    use crate::schema::{ColumnDef, ColumnKind};

    #[test]
    fn test_parse_line() {
        let schema = Schema::default();
        let parser = LineParser::new(&schema, UuidGenerator);

        let item = parser.parse_line("Mollis consequat,9.00,2").unwrap();
        assert_eq!(item.name, "Mollis consequat");
        assert_eq!(item.price, 9.0);
        assert_eq!(item.quantity, 2);
        assert!(!item.id.is_empty());
    }

    #[test]
    fn test_same_line_gets_new_id_each_time() {
        let schema = Schema::default();
        let parser = LineParser::new(&schema, UuidGenerator);

        let first = parser.parse_line("Tvoluptatem,10.32,1").unwrap();
        let second = parser.parse_line("Tvoluptatem,10.32,1").unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(
            (first.name, first.price, first.quantity),
            (second.name, second.price, second.quantity)
        );
    }

    #[test]
    fn test_values_are_trimmed() {
        let schema = Schema::default();
        let ids = SequentialIdGenerator::new("t");
        let parser = LineParser::new(&schema, &ids);

        let item = parser.parse_line("  Scelerisque lacinia , 18.90 , 1 ").unwrap();
        assert_eq!(item.id, "t-1");
        assert_eq!(item.name, "Scelerisque lacinia");
        assert_eq!(item.price, 18.90);
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_no_schema_checks_are_applied() {
        let schema = Schema::default();
        let parser = LineParser::new(&schema, UuidGenerator);

        let item = parser.parse_line(",-4.5,0").unwrap();
        assert_eq!(item.name, "");
        assert_eq!(item.price, -4.5);
        assert_eq!(item.quantity, 0);
    }

    #[test]
    fn test_unconvertible_lines_fail() {
        let schema = Schema::default();
        let parser = LineParser::new(&schema, UuidGenerator);

        assert!(matches!(
            parser.parse_line("Mollis consequat,9.00"),
            Err(CoreError::MalformedLine { .. })
        ));
        assert!(matches!(
            parser.parse_line("Mollis consequat,abc,2"),
            Err(CoreError::MalformedLine { .. })
        ));
        assert!(matches!(
            parser.parse_line("Mollis consequat,9.00,two"),
            Err(CoreError::MalformedLine { .. })
        ));
    }

    #[test]
    fn test_empty_line_fails() {
        let schema = Schema::default();
        let parser = LineParser::new(&schema, UuidGenerator);

        assert!(matches!(
            parser.parse_line("   "),
            Err(CoreError::MalformedLine { .. })
        ));
    }

    #[test]
    fn test_parse_record_matches_parse_line() {
        let schema = Schema::default();
        let parser = LineParser::new(&schema, SequentialIdGenerator::new("r"));

        let cells = StringRecord::from(vec!["Tvoluptatem", "10.32", "1"]);
        let from_record = parser.parse_record(&cells).unwrap();
        let from_line = parser.parse_line("Tvoluptatem,10.32,1").unwrap();

        assert_eq!(from_record.id, "r-1");
        assert_eq!(
            (from_record.name, from_record.price, from_record.quantity),
            (from_line.name, from_line.price, from_line.quantity)
        );
    }

    #[test]
    fn test_malformed_error_names_the_line() {
        let schema = Schema::default();
        let parser = LineParser::new(&schema, UuidGenerator);

        match parser.parse_line("Mollis consequat,abc,2") {
            Err(CoreError::MalformedLine { line, reason }) => {
                assert_eq!(line, "Mollis consequat,abc,2");
                assert!(reason.starts_with("price"));
            }
            other => panic!("expected MalformedLine, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_field_positions() {
        let schema = Schema::new(vec![
            ColumnDef::new("Qty", Some(CartField::Quantity), ColumnKind::PositiveInteger),
            ColumnDef::new("SKU", None, ColumnKind::Text),
            ColumnDef::new("Unit price", Some(CartField::Price), ColumnKind::PositiveNumber),
            ColumnDef::new("Name", Some(CartField::Name), ColumnKind::Text),
        ])
        .unwrap();
        let parser = LineParser::new(&schema, SequentialIdGenerator::new("c"));

        let item = parser.parse_line("3,W-7,1.25,Widget").unwrap();
        assert_eq!(item.name, "Widget");
        assert_eq!(item.price, 1.25);
        assert_eq!(item.quantity, 3);
    }
}
