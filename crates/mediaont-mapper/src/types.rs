//! Rule descriptors and per-file result types

use mediaont_domain::vocab;
use mediaont_domain::{Exactness, Iri, Literal, Node, RawValue};

use crate::error::SkipValue;
use crate::nodes::NodeAllocator;

/// Inputs a value factory may consult besides the raw value
#[derive(Debug, Clone, Copy, Default)]
pub struct FactoryContext<'a> {
    /// Language tag for string literals
    pub language: Option<&'a str>,
}

/// Converts one raw value into a literal, or skips it
pub type ValueFactory = fn(&RawValue, &FactoryContext<'_>) -> Result<Literal, SkipValue>;

/// Produces the reified node standing for one value
pub type NodeFactory = fn(&str, &mut NodeAllocator) -> Node;

/// Predicate that labels a reified node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPredicate {
    /// `rdfs:label`
    RdfsLabel,

    /// `foaf:name`, for person-like entities
    FoafName,
}

impl LabelPredicate {
    /// The predicate IRI
    pub fn iri(&self) -> Iri {
        match self {
            LabelPredicate::RdfsLabel => vocab::rdfs_label(),
            LabelPredicate::FoafName => vocab::foaf_name(),
        }
    }

    /// Whether this is an override of the generic label
    pub fn is_override(&self) -> bool {
        !matches!(self, LabelPredicate::RdfsLabel)
    }
}

/// Whether, and how, a field value is reified into its own node
#[derive(Debug, Clone, Copy)]
pub enum NodeInsertion {
    /// Attach the literal directly to the resource
    None,

    /// Anonymous node labelled with `rdfs:label`
    Default,

    /// Custom node and label, used only in extended mode; falls back to
    /// [`NodeInsertion::Default`] otherwise
    Custom {
        /// Node factory
        node: NodeFactory,
        /// Label predicate
        label: LabelPredicate,
    },
}

/// Static description of how one source field maps to the media ontology
#[derive(Debug, Clone, Copy)]
pub struct MappingRule {
    /// Source field key (also the local name of its source property)
    pub key: &'static str,

    /// Local name of the target `ma:` property
    pub target: &'static str,

    /// Exact or related match
    pub exactness: Exactness,

    /// Converts each raw value
    pub factory: ValueFactory,

    /// Reification of each value
    pub insertion: NodeInsertion,
}

impl MappingRule {
    /// Rule attaching literals directly to the resource
    pub const fn direct(
        key: &'static str,
        target: &'static str,
        exactness: Exactness,
        factory: ValueFactory,
    ) -> Self {
        Self {
            key,
            target,
            exactness,
            factory,
            insertion: NodeInsertion::None,
        }
    }

    /// Rule reifying every value into a node
    pub const fn reified(
        key: &'static str,
        target: &'static str,
        exactness: Exactness,
        factory: ValueFactory,
        insertion: NodeInsertion,
    ) -> Self {
        Self {
            key,
            target,
            exactness,
            factory,
            insertion,
        }
    }
}

/// Node factory and label predicate resolved for one run
#[derive(Debug, Clone, Copy)]
pub struct Reification {
    /// Node factory
    pub node: NodeFactory,

    /// Label predicate
    pub label: LabelPredicate,
}

/// A rule whose node insertion has been settled against the extended flag
#[derive(Debug, Clone, Copy)]
pub struct ResolvedRule {
    /// The static rule
    pub rule: MappingRule,

    /// `None` attaches literals directly
    pub reification: Option<Reification>,
}

impl ResolvedRule {
    /// Settle `rule` for a run with or without extended mode
    pub fn resolve(rule: MappingRule, extended: bool) -> Self {
        let anonymous = Reification {
            node: crate::nodes::anonymous_node,
            label: LabelPredicate::RdfsLabel,
        };
        let reification = match rule.insertion {
            NodeInsertion::None => None,
            NodeInsertion::Default => Some(anonymous),
            NodeInsertion::Custom { node, label } if extended => Some(Reification { node, label }),
            NodeInsertion::Custom { .. } => Some(anonymous),
        };
        Self { rule, reification }
    }
}

/// Counters for one field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldOutcome {
    /// Values that produced triples
    pub values_mapped: usize,

    /// Values dropped by their factory
    pub values_skipped: usize,
}

/// What happened to one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Metadata was read and mapped
    Mapped,

    /// The file carries no metadata container
    NoMetadata,

    /// The container could not be parsed
    Unreadable(String),
}

/// Result of mapping one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Resource identifier of the file
    pub resource: Iri,

    /// Outcome
    pub status: FileStatus,

    /// Fields that produced at least one triple
    pub fields_mapped: usize,

    /// Values dropped by their factory
    pub values_skipped: usize,

    /// Triples newly added to the sink
    pub triples_added: usize,
}

impl FileReport {
    /// Empty report for `resource`
    pub fn new(resource: Iri, status: FileStatus) -> Self {
        Self {
            resource,
            status,
            fields_mapped: 0,
            values_skipped: 0,
            triples_added: 0,
        }
    }
}
