//! Field mapping dispatcher
//!
//! The [`Emitter`] owns everything that is scoped to one file: the resource
//! node, the blank-node allocator and the sink. `add_metadata` is the one
//! generic path every rule goes through; smart titles and GPS coordinates
//! use the lower-level `emit_*` helpers directly.

use mediaont_domain::traits::GraphSink;
use mediaont_domain::vocab;
use mediaont_domain::{Exactness, Iri, Literal, MetadataField, Namespace, Node, Term, Triple};
use tracing::debug;

use crate::config::MapperConfig;
use crate::error::MapperError;
use crate::nodes::NodeAllocator;
use crate::predicate::{paired_source_key, resolve};
use crate::types::{FactoryContext, FieldOutcome, LabelPredicate, ResolvedRule};

/// Emits the triples of one file into a sink
pub struct Emitter<'a, S: GraphSink> {
    sink: &'a mut S,
    config: &'a MapperConfig,
    vocabulary: &'a Namespace,
    resource: Iri,
    nodes: NodeAllocator,
    added: usize,
}

impl<'a, S> Emitter<'a, S>
where
    S: GraphSink,
    S::Error: std::fmt::Display,
{
    /// Create an emitter for `resource`
    pub fn new(
        sink: &'a mut S,
        config: &'a MapperConfig,
        vocabulary: &'a Namespace,
        resource: Iri,
    ) -> Self {
        Self {
            sink,
            config,
            vocabulary,
            nodes: NodeAllocator::new(resource.clone()),
            resource,
            added: 0,
        }
    }

    /// The file being described
    pub fn resource(&self) -> &Iri {
        &self.resource
    }

    /// The mapping configuration
    pub fn config(&self) -> &MapperConfig {
        self.config
    }

    /// Triples this emitter newly added to the sink
    pub fn added(&self) -> usize {
        self.added
    }

    /// A fresh blank node scoped to the resource
    pub fn fresh_node(&mut self) -> Node {
        Node::Blank(self.nodes.fresh())
    }

    /// Map every value of `field` according to `rule`
    pub fn add_metadata(
        &mut self,
        field: &MetadataField,
        rule: &ResolvedRule,
    ) -> Result<FieldOutcome, MapperError> {
        let ctx = FactoryContext {
            language: self.config.language.as_deref(),
        };
        let mut outcome = FieldOutcome::default();

        for (role, raw) in field.value.entries() {
            let literal = match (rule.rule.factory)(raw, &ctx) {
                Ok(literal) => literal,
                Err(skip) => {
                    debug!("{}: {}", field.key, skip);
                    outcome.values_skipped += 1;
                    continue;
                }
            };

            let source_key = match role {
                Some(role) => paired_source_key(rule.rule.key, role),
                None => rule.rule.key.to_string(),
            };
            let predicate = self.predicate(rule.rule.target, rule.rule.exactness, &source_key)?;

            match rule.reification {
                None => {
                    let subject = Node::Iri(self.resource.clone());
                    self.emit(Triple::new(subject, predicate, literal))?;
                }
                Some(reification) => {
                    let node = (reification.node)(literal.lexical(), &mut self.nodes);
                    self.emit_reified(predicate, node, reification.label, literal)?;
                }
            }
            outcome.values_mapped += 1;
        }

        debug!(
            "{} -> ma:{}: {} mapped, {} skipped",
            field.key, rule.rule.target, outcome.values_mapped, outcome.values_skipped
        );
        Ok(outcome)
    }

    /// Resolve the predicate for `source_key`, asserting the sub-property
    /// axiom when the source property is chosen
    pub fn predicate(
        &mut self,
        target: &str,
        exactness: Exactness,
        source_key: &str,
    ) -> Result<Iri, MapperError> {
        let resolved = resolve(
            target,
            exactness,
            source_key,
            self.vocabulary,
            self.config.profile,
        );
        if let Some(axiom) = resolved.axiom {
            self.emit(axiom)?;
        }
        Ok(resolved.predicate)
    }

    /// Attach `literal` directly to the resource
    pub fn emit_literal(
        &mut self,
        target: &str,
        exactness: Exactness,
        source_key: &str,
        literal: Literal,
    ) -> Result<(), MapperError> {
        let predicate = self.predicate(target, exactness, source_key)?;
        let subject = Node::Iri(self.resource.clone());
        self.emit(Triple::new(subject, predicate, literal))
    }

    /// Link the resource to `node` and label the node with `literal`
    fn emit_reified(
        &mut self,
        predicate: Iri,
        node: Node,
        label: LabelPredicate,
        literal: Literal,
    ) -> Result<(), MapperError> {
        if label.is_override() {
            self.emit(Triple::new(
                label.iri(),
                vocab::rdfs_sub_property_of(),
                vocab::rdfs_label(),
            ))?;
        }
        let subject = Node::Iri(self.resource.clone());
        self.emit(Triple::new(subject, predicate, Term::Node(node.clone())))?;
        self.emit(Triple::new(node, label.iri(), literal))
    }

    /// Insert one triple into the sink
    pub fn emit(&mut self, triple: Triple) -> Result<(), MapperError> {
        let inserted = self
            .sink
            .insert(triple)
            .map_err(|e| MapperError::Sink(e.to_string()))?;
        if inserted {
            self.added += 1;
        }
        Ok(())
    }
}
