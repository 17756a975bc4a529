//! # Item Identifiers
//!
//! Every parsed cart item gets a fresh id. Where ids come from is pluggable so
//! tests can use predictable values.
//!
//! ## Usage
//! ```rust
//! use cart_core::id::{IdGenerator, SequentialIdGenerator, UuidGenerator};
//!
//! let ids = SequentialIdGenerator::new("item");
//! assert_eq!(ids.next_id(), "item-1");
//! assert_eq!(ids.next_id(), "item-2");
//!
//! let uuid = UuidGenerator.next_id();
//! assert_eq!(uuid.len(), 36);
//! ```

use std::cell::Cell;

use uuid::Uuid;

/// Source of unique item ids.
pub trait IdGenerator {
    /// Returns an id never handed out before by this generator.
    fn next_id(&self) -> String;
}

impl<G: IdGenerator + ?Sized> IdGenerator for &G {
    fn next_id(&self) -> String {
        (**self).next_id()
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&self) -> String {
        (**self).next_id()
    }
}

/// Random UUID v4 ids. Globally unique without coordination.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Counter-based ids: `prefix-1`, `prefix-2`, ...
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    prefix: String,
    issued: Cell<u64>,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        SequentialIdGenerator {
            prefix: prefix.into(),
            issued: Cell::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        format!("{}-{}", self.prefix, next)
    }
}
