//! mediaont Graph Layer
//!
//! An in-memory RDF graph implementing the `GraphSink` trait, with prefix
//! bindings and Turtle / N-Triples serialization.
//!
//! # Architecture
//!
//! - `BTreeSet` of triples: set semantics and a stable output order
//! - Prefix bindings are only used when writing; they never change the
//!   stored triples
//!
//! # Examples
//!
//! ```
//! use mediaont_domain::traits::GraphSink;
//! use mediaont_domain::{Iri, Literal, Namespace, Triple};
//! use mediaont_graph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.bind(&Namespace::ma());
//! graph
//!     .insert(Triple::new(
//!         Iri::new("file:///music/a.mp3"),
//!         Namespace::ma().term("title"),
//!         Literal::plain("Allegro"),
//!     ))
//!     .unwrap();
//!
//! assert!(graph.to_turtle().contains("ma:title \"Allegro\""));
//! ```

#![warn(missing_docs)]

mod ntriples;
mod turtle;

use std::collections::{BTreeMap, BTreeSet};
use std::io;

use mediaont_domain::traits::GraphSink;
use mediaont_domain::{Iri, Namespace, Node, Term, Triple};
use thiserror::Error;

pub use ntriples::write_ntriples;
pub use turtle::write_turtle;

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    /// IRI that no serialization can represent
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    /// Output could not be written
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// In-memory set of triples with prefix bindings
#[derive(Debug, Clone, Default)]
pub struct Graph {
    triples: BTreeSet<Triple>,
    prefixes: BTreeMap<String, String>,
}

impl Graph {
    /// Create an empty graph without bindings
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `namespace`'s prefix, replacing an earlier binding of the same
    /// prefix
    pub fn bind(&mut self, namespace: &Namespace) {
        self.prefixes
            .insert(namespace.prefix().to_string(), namespace.as_str().to_string());
    }

    /// Bound prefixes and their namespace IRIs, ordered by prefix
    pub fn prefixes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes.iter().map(|(p, iri)| (p.as_str(), iri.as_str()))
    }

    /// Number of triples
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Whether the graph holds no triple
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Whether `triple` is in the graph
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Iterate over triples in subject, predicate, object order
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Distinct subjects
    pub fn subjects(&self) -> BTreeSet<&Node> {
        self.triples.iter().map(|t| &t.subject).collect()
    }

    /// Triples about `subject`
    pub fn about<'a>(&'a self, subject: &'a Node) -> impl Iterator<Item = &'a Triple> + 'a {
        self.triples.iter().filter(move |t| &t.subject == subject)
    }

    /// Serialize as Turtle
    pub fn to_turtle(&self) -> String {
        let mut out = Vec::new();
        // writing into a Vec cannot fail
        let _ = write_turtle(self, &mut out);
        String::from_utf8_lossy(&out).into_owned()
    }

    /// Serialize as N-Triples
    pub fn to_ntriples(&self) -> String {
        let mut out = Vec::new();
        let _ = write_ntriples(self, &mut out);
        String::from_utf8_lossy(&out).into_owned()
    }

    /// Shortest `prefix:local` form of `iri`, if a binding allows one
    pub fn compact(&self, iri: &Iri) -> Option<String> {
        self.prefixes
            .iter()
            .filter_map(|(prefix, ns)| {
                let local = iri.as_str().strip_prefix(ns.as_str())?;
                is_local_name(local).then(|| format!("{}:{}", prefix, local))
            })
            .min_by_key(|name| name.len())
    }
}

impl GraphSink for Graph {
    type Error = GraphError;

    fn insert(&mut self, triple: Triple) -> Result<bool, Self::Error> {
        check_iri(&triple.predicate)?;
        if let Node::Iri(iri) = &triple.subject {
            check_iri(iri)?;
        }
        if let Term::Node(Node::Iri(iri)) = &triple.object {
            check_iri(iri)?;
        }
        Ok(self.triples.insert(triple))
    }
}

fn check_iri(iri: &Iri) -> Result<(), GraphError> {
    let value = iri.as_str();
    let invalid = value.is_empty()
        || value
            .chars()
            .any(|c| {
                c.is_whitespace()
                    || c.is_control()
                    || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\')
            });
    if invalid {
        return Err(GraphError::InvalidIri(value.to_string()));
    }
    Ok(())
}

/// Local names written in prefixed form: letters, digits, `_`, `-` and
/// inner dots
fn is_local_name(local: &str) -> bool {
    !local.is_empty()
        && !local.starts_with(['-', '.'])
        && !local.ends_with('.')
        && local
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
