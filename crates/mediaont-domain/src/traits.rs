//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the mapping engine and
//! infrastructure. Implementations live in other crates.

use std::collections::BTreeSet;
use std::convert::Infallible;
use std::path::Path;

use crate::{FieldMap, MetadataField, Triple};

/// Lookup from field key to decoded field
///
/// Implemented by [`FieldMap`]; the mapping engine only ever reads through
/// this trait.
pub trait FieldLookup {
    /// Get the field stored under `key`
    fn field(&self, key: &str) -> Option<&MetadataField>;
}

impl FieldLookup for FieldMap {
    fn field(&self, key: &str) -> Option<&MetadataField> {
        self.get(key)
    }
}

/// Trait for reading embedded metadata from a file
///
/// Implemented by the infrastructure layer (mediaont-reader)
pub trait MetadataReader {
    /// Error type for read operations
    type Error;

    /// Read the fields of `path`
    ///
    /// Returns `Ok(None)` when the file carries no metadata container the
    /// reader understands.
    fn read(&self, path: &Path) -> Result<Option<FieldMap>, Self::Error>;
}

/// Trait for collecting emitted triples
///
/// Implemented by the infrastructure layer (mediaont-graph). Sinks have set
/// semantics: inserting a triple that is already present is a no-op.
pub trait GraphSink {
    /// Error type for sink operations
    type Error;

    /// Insert a triple; returns whether it was new
    fn insert(&mut self, triple: Triple) -> Result<bool, Self::Error>;
}

impl GraphSink for BTreeSet<Triple> {
    type Error = Infallible;

    fn insert(&mut self, triple: Triple) -> Result<bool, Self::Error> {
        Ok(BTreeSet::insert(self, triple))
    }
}
