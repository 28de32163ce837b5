//! Node factories: the intermediate resources that reified values hang off

use mediaont_domain::{BlankNode, Iri, Namespace, Node};
use url::form_urlencoded::byte_serialize;

/// Hands out blank nodes for one resource
///
/// Labels are scoped to the resource and numbered from zero, so mapping the
/// same file twice yields the same nodes, and no two values ever share one.
#[derive(Debug, Clone)]
pub struct NodeAllocator {
    scope: Iri,
    next: usize,
}

impl NodeAllocator {
    /// Create an allocator for `scope`
    pub fn new(scope: Iri) -> Self {
        Self { scope, next: 0 }
    }

    /// A blank node never handed out before
    pub fn fresh(&mut self) -> BlankNode {
        let node = BlankNode::scoped(&self.scope, self.next);
        self.next += 1;
        node
    }

    /// Number of nodes handed out so far
    pub fn allocated(&self) -> usize {
        self.next
    }
}

/// A fresh anonymous node, whatever the value
pub fn anonymous_node(_raw: &str, nodes: &mut NodeAllocator) -> Node {
    Node::Blank(nodes.fresh())
}

/// A fresh node standing for a person; named through `foaf:name`
pub fn person_node(_raw: &str, nodes: &mut NodeAllocator) -> Node {
    Node::Blank(nodes.fresh())
}

/// Lexvo URI for an ISO 639-2/3 language code
///
/// Characters that cannot appear in an IRI are percent-encoded; an empty
/// code gets a fresh blank node.
pub fn language_node(raw: &str, nodes: &mut NodeAllocator) -> Node {
    let code = raw.trim();
    if code.is_empty() {
        return Node::Blank(nodes.fresh());
    }
    let encoded: String = byte_serialize(code.as_bytes()).collect();
    Node::Iri(Namespace::lexvo().term(&encoded))
}
