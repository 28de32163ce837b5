//! mediaont Mapper
//!
//! Converts decoded media metadata (ID3 frames, EXIF tags) into RDF triples
//! of the W3C Ontology for Media Resources.
//!
//! # Overview
//!
//! Every known field is described by a static [`MappingRule`]: the `ma:`
//! property it maps to, whether it is an exact or only a related match, the
//! value factory converting its raw values, and whether each value gets its
//! own node. One generic dispatcher applies those rules; the output
//! [`OutputProfile`](mediaont_domain::OutputProfile) and the extended flag
//! in [`MapperConfig`] decide which predicates end up in the graph.
//!
//! # Architecture
//!
//! ```text
//! File → MetadataReader → FieldMap → Mapper → Triples → GraphSink
//! ```
//!
//! # Key Features
//!
//! - **Table-driven predicates**: one exactness × profile table for every field
//! - **Value factories**: strings, dates, decimals, durations, with per-value skips
//! - **Reified values**: people, languages, genres as their own nodes
//! - **Smart titles**: content group + title + subtitle in extended mode
//! - **GPS coordinates**: sexagesimal rationals to signed decimal degrees
//!
//! # Example Usage
//!
//! ```
//! use std::collections::BTreeSet;
//! use mediaont_domain::{FieldMap, Iri, MetadataField};
//! use mediaont_mapper::{Mapper, MapperConfig, RuleSet};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mapper = Mapper::new(MapperConfig::default(), RuleSet::id3())?;
//!
//! let fields: FieldMap = [
//!     MetadataField::single("TIT2", "Allegro"),
//!     MetadataField::single("TLEN", "1500"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut graph = BTreeSet::new();
//! let report = mapper.map_fields(Iri::new("file:///music/a.mp3"), &fields, &mut graph)?;
//!
//! assert_eq!(report.fields_mapped, 2);
//! assert_eq!(graph.len(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

mod config;
mod dispatcher;
mod error;
mod mapper;
mod types;

pub mod geo;
pub mod nodes;
pub mod predicate;
pub mod rules;
pub mod smart_title;
pub mod values;


pub use config::MapperConfig;
pub use dispatcher::Emitter;
pub use error::{MapperError, SkipValue};
pub use mapper::{base_iri, resource_iri, Mapper};
pub use rules::RuleSet;
pub use types::{
    FactoryContext, FieldOutcome, FileReport, FileStatus, LabelPredicate, MappingRule,
    NodeFactory, NodeInsertion, Reification, ResolvedRule, ValueFactory,
};
