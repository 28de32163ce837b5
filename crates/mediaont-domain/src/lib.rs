//! mediaont Domain Layer
//!
//! This crate holds the vocabulary shared by every other mediaont crate: RDF
//! terms and triples, namespaces of the Ontology for Media Resources and its
//! neighbours, output profiles, decoded metadata fields, and the traits that
//! separate the mapping engine from container parsing and graph storage.
//!
//! ## Key Concepts
//!
//! - **Triple**: a (subject, predicate, object) statement about a media file
//! - **Profile**: whether `ma:` properties, source-vocabulary properties, or
//!   both end up in the output
//! - **Exactness**: whether a source field denotes the same concept as its
//!   target `ma:` property, or only a related one
//! - **MetadataField**: a decoded tag value, single, multi-valued or paired
//!
//! ## Architecture
//!
//! - Pure data and pure functions only
//! - Readers and sinks are traits; implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod field;
pub mod profile;
pub mod term;
pub mod traits;
pub mod vocab;

// Re-exports for convenience
pub use field::{FieldMap, FieldValue, MetadataField, RawValue};
pub use profile::{Exactness, OutputProfile};
pub use term::{BlankNode, Iri, Literal, Node, Term, Triple};
pub use vocab::Namespace;
