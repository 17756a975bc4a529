//! # Cart Parser
//!
//! Reads a cart file and turns it into a [`ParseResult`].
//!
//! ## Parse Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  parse("cart.csv")                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  read_file ──── I/O error? ──────────────► Err(EmptyPath/FileNotFound/ │
//! │       │                                        ReadFailed)              │
//! │       ▼                                                                 │
//! │  validate ───── empty? ──────────────────► Err(Core(EmptyContent))     │
//! │       │                                                                 │
//! │       ├──────── any defects? ────────────► Err(ValidationFailed(all))  │
//! │       ▼                                                                 │
//! │  parse_line (each data row)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  calc_total ──────────────────────────────► Ok(ParseResult)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::Path;

use cart_core::id::UuidGenerator;
use cart_core::records::data_rows;
use cart_core::{
    calc_total, CartItem, IdGenerator, LineParser, ParseResult, Schema, ValidationError, Validator,
};
use tracing::{debug, info, warn};

use crate::config::ParserConfig;
use crate::error::{LoaderError, LoaderResult};
use crate::reader::{FileReader, FsReader};

/// Parses cart CSV files against a schema.
///
/// Owns its schema, its file reader and its id generator. Each call is
/// independent; nothing is cached between calls.
///
/// ## Usage
/// ```rust,no_run
/// use cart_loader::CartParser;
///
/// let parser = CartParser::new();
/// let cart = parser.parse("samples/cart.csv")?;
/// println!("{} items, total {:.2}", cart.item_count(), cart.total());
/// # Ok::<(), cart_loader::LoaderError>(())
/// ```
#[derive(Debug)]
pub struct CartParser<R = FsReader, G = UuidGenerator> {
    schema: Schema,
    reader: R,
    ids: G,
}

impl CartParser {
    /// Default schema, file system reader, UUID ids.
    pub fn new() -> Self {
        Self::with_parts(Schema::default(), FsReader, UuidGenerator)
    }

    /// Builds a parser from loaded configuration.
    pub fn from_config(config: ParserConfig) -> Self {
        Self::with_parts(config.schema, FsReader, UuidGenerator)
    }
}

impl Default for CartParser {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: FileReader, G: IdGenerator> CartParser<R, G> {
    pub fn with_parts(schema: Schema, reader: R, ids: G) -> Self {
        CartParser {
            schema,
            reader,
            ids,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Reads, validates and parses a cart file.
    ///
    /// ## Errors
    /// - I/O errors from the reader, unchanged
    /// - `Core(EmptyContent)` if the file has no text
    /// - `ValidationFailed` with every defect if the document doesn't conform
    pub fn parse(&self, path: impl AsRef<Path>) -> LoaderResult<ParseResult> {
        let path = path.as_ref();
        info!(path = %path.display(), "Parsing cart file");

        let content = self.read_file(path)?;

        let errors = self.validate(&content)?;
        if !errors.is_empty() {
            warn!(
                path = %path.display(),
                error_count = errors.len(),
                "Cart file failed validation"
            );
            return Err(LoaderError::ValidationFailed(errors));
        }

        let lines = LineParser::new(&self.schema, &self.ids);
        let items = data_rows(&content)?
            .iter()
            .map(|row| lines.parse_record(&row.cells))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = items.len(), "Parsed cart lines");

        let result = ParseResult::new(items);
        info!(
            items = result.item_count(),
            total = result.total(),
            "Cart file parsed"
        );
        Ok(result)
    }

    /// Reads raw file contents through the configured reader.
    pub fn read_file(&self, path: impl AsRef<Path>) -> LoaderResult<String> {
        let content = self.reader.read_file(path.as_ref())?;
        debug!(bytes = content.len(), "Read cart file");
        Ok(content)
    }

    /// Validates CSV text against this parser's schema.
    ///
    /// Returns every defect found; an empty list means the text conforms.
    pub fn validate(&self, content: &str) -> LoaderResult<Vec<ValidationError>> {
        let errors = Validator::new(&self.schema).validate(content)?;
        debug!(error_count = errors.len(), "Validated cart content");
        Ok(errors)
    }

    /// Converts one data line into an item with a fresh id.
    pub fn parse_line(&self, line: &str) -> LoaderResult<CartItem> {
        Ok(LineParser::new(&self.schema, &self.ids).parse_line(line)?)
    }

    /// Total of price × quantity over `items`.
    pub fn calc_total(&self, items: &[CartItem]) -> f64 {
        calc_total(items)
    }
}
