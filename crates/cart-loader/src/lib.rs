//! # cart-loader: File Access for the Cart Parser
//!
//! This crate reads cart CSV files and runs them through `cart-core`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Parser Data Flow                            │
//! │                                                                         │
//! │  Caller: parser.parse("cart.csv")                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   cart-loader (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   FileReader  │    │  CartParser   │    │ ParserConfig │  │   │
//! │  │   │  (reader.rs)  │───►│  (parser.rs)  │◄───│ (config.rs)  │  │   │
//! │  │   │   FsReader    │    │ parse()       │    │ schema.toml  │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │                                │                                │   │
//! │  └────────────────────────────────┼────────────────────────────────┘   │
//! │                                   ▼                                     │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   cart-core: Validator, LineParser, calc_total (pure)           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`parser`] - `CartParser`, the public entry point
//! - [`reader`] - File-read collaborator
//! - [`config`] - Schema configuration loading
//! - [`error`] - Loader error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cart_loader::{CartParser, LoaderError, ParserConfig};
//!
//! let parser = CartParser::from_config(ParserConfig::load(None)?);
//!
//! match parser.parse("cart.csv") {
//!     Ok(cart) => println!("total: {:.2}", cart.total()),
//!     Err(LoaderError::ValidationFailed(errors)) => {
//!         for err in errors {
//!             eprintln!("{}", err);
//!         }
//!     }
//!     Err(err) => eprintln!("{}", err),
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod parser;
pub mod reader;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ParserConfig, SCHEMA_PATH_ENV};
pub use error::{LoaderError, LoaderResult};
pub use parser::CartParser;
pub use reader::{FileReader, FsReader};
