//! # Parser Configuration
//!
//! The schema is the only thing a cart parser can be configured with.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Explicit path passed to ParserConfig::load (highest priority)      │
//! │                                                                         │
//! │  2. Environment Variable                                               │
//! │     CART_SCHEMA_PATH=/etc/cart/schema.toml                             │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     Product name,Price,Quantity                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # schema.toml
//! [[columns]]
//! name = "Product name"
//! field = "name"
//! kind = "text"
//!
//! [[columns]]
//! name = "Price"
//! field = "price"
//! kind = "positive_number"
//!
//! [[columns]]
//! name = "Quantity"
//! field = "quantity"
//! kind = "positive_integer"
//! ```
//!
//! Columns without a `field` are validated but not carried into items.

use std::path::{Path, PathBuf};

use cart_core::{ColumnDef, Schema};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{LoaderError, LoaderResult};

/// Environment variable naming the schema file.
pub const SCHEMA_PATH_ENV: &str = "CART_SCHEMA_PATH";

/// On-disk shape of the schema file.
#[derive(Debug, Serialize, Deserialize)]
struct SchemaFile {
    columns: Vec<ColumnDef>,
}

/// Cart parser configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserConfig {
    pub schema: Schema,
}

impl ParserConfig {
    pub fn new(schema: Schema) -> Self {
        ParserConfig { schema }
    }

    /// Loads configuration from file or environment, falling back to defaults.
    ///
    /// ## Load Order
    /// 1. `config_path`, if given
    /// 2. `CART_SCHEMA_PATH`, if set
    /// 3. Default schema
    ///
    /// A path that doesn't exist falls back to defaults. A file that exists
    /// but can't be read or describes an invalid schema is an error.
    pub fn load(config_path: Option<PathBuf>) -> LoaderResult<Self> {
        let env_path = std::env::var_os(SCHEMA_PATH_ENV).map(PathBuf::from);

        match resolve_path(config_path, env_path) {
            Some(path) if path.exists() => {
                info!(?path, "Loading cart schema from file");
                let contents = std::fs::read_to_string(&path).map_err(|e| {
                    LoaderError::ConfigLoadFailed(format!("{}: {}", path.display(), e))
                })?;
                Self::from_toml_str(&contents)
            }
            Some(path) => {
                debug!(?path, "Schema file not found, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load cart schema: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML schema document.
    pub fn from_toml_str(contents: &str) -> LoaderResult<Self> {
        let file: SchemaFile = toml::from_str(contents)?;
        let schema = Schema::new(file.columns)?;
        Ok(ParserConfig { schema })
    }

    /// Renders the schema as a TOML document.
    pub fn to_toml_string(&self) -> LoaderResult<String> {
        let file = SchemaFile {
            columns: self.schema.columns().to_vec(),
        };
        Ok(toml::to_string_pretty(&file)?)
    }

    /// Writes the schema to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> LoaderResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| LoaderError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = self.to_toml_string()?;
        std::fs::write(path, contents).map_err(|e| LoaderError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Cart schema saved");
        Ok(())
    }
}

/// Picks the schema file: an explicit path wins over the environment.
fn resolve_path(explicit: Option<PathBuf>, env: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .or(env)
        .filter(|path| !path.as_os_str().is_empty())
}
