//! Term module - the RDF building blocks emitted for every media file

use std::fmt;

/// An absolute IRI
///
/// No syntax check is performed; IRIs are built from known namespaces or
/// from `file://` URLs produced by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iri(String);

impl Iri {
    /// Create an IRI from its string form
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the IRI as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

/// A blank node, identified by a label local to one graph
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlankNode(String);

impl BlankNode {
    /// Create a blank node with an explicit label
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Create the `index`-th blank node scoped to a resource
    ///
    /// The label is derived from a name-based UUID of the scope IRI, so the
    /// same resource always yields the same sequence of labels and two
    /// different resources never collide inside one graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediaont_domain::{BlankNode, Iri};
    ///
    /// let file = Iri::new("file:///music/track.mp3");
    /// assert_eq!(BlankNode::scoped(&file, 0), BlankNode::scoped(&file, 0));
    /// assert_ne!(BlankNode::scoped(&file, 0), BlankNode::scoped(&file, 1));
    /// ```
    pub fn scoped(scope: &Iri, index: usize) -> Self {
        let uuid = uuid::Uuid::new_v5(&uuid::Uuid::NAMESPACE_URL, scope.as_str().as_bytes());
        let simple = uuid.simple().to_string();
        Self(format!("n{}x{}", &simple[..12], index))
    }

    /// Get the label (without the `_:` prefix)
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// A resource: anything that can be the subject of a triple
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Node {
    /// Named resource
    Iri(Iri),

    /// Anonymous resource
    Blank(BlankNode),
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Iri(iri) => iri.fmt(f),
            Node::Blank(blank) => blank.fmt(f),
        }
    }
}

impl From<Iri> for Node {
    fn from(iri: Iri) -> Self {
        Node::Iri(iri)
    }
}

impl From<BlankNode> for Node {
    fn from(blank: BlankNode) -> Self {
        Node::Blank(blank)
    }
}

/// A literal value with an optional datatype or language tag
///
/// A literal never carries both: language-tagged strings are implicitly
/// `rdf:langString`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    lexical: String,
    datatype: Option<Iri>,
    language: Option<String>,
}

impl Literal {
    /// Create a plain string literal
    pub fn plain(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            language: None,
        }
    }

    /// Create a typed literal
    pub fn typed(lexical: impl Into<String>, datatype: Iri) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Some(datatype),
            language: None,
        }
    }

    /// Create a string literal, tagged with `language` when one is given
    pub fn with_language(lexical: impl Into<String>, language: Option<&str>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            language: language.map(str::to_string),
        }
    }

    /// Get the lexical form
    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    /// Get the datatype, if any
    pub fn datatype(&self) -> Option<&Iri> {
        self.datatype.as_ref()
    }

    /// Get the language tag, if any
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", escape_literal(&self.lexical))?;
        if let Some(language) = &self.language {
            write!(f, "@{}", language)
        } else if let Some(datatype) = &self.datatype {
            write!(f, "^^{}", datatype)
        } else {
            Ok(())
        }
    }
}

/// Escape a lexical form for a double-quoted N-Triples / Turtle string
pub fn escape_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Object position of a triple
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// A resource
    Node(Node),

    /// A literal value
    Literal(Literal),
}

impl Term {
    /// Get the literal, if this term is one
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(literal) => Some(literal),
            Term::Node(_) => None,
        }
    }

    /// Get the node, if this term is one
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Term::Node(node) => Some(node),
            Term::Literal(_) => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Node(node) => node.fmt(f),
            Term::Literal(literal) => literal.fmt(f),
        }
    }
}

impl From<Node> for Term {
    fn from(node: Node) -> Self {
        Term::Node(node)
    }
}

impl From<Iri> for Term {
    fn from(iri: Iri) -> Self {
        Term::Node(Node::Iri(iri))
    }
}

impl From<BlankNode> for Term {
    fn from(blank: BlankNode) -> Self {
        Term::Node(Node::Blank(blank))
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(literal)
    }
}

/// A single RDF statement
///
/// Triples are plain values; graphs give them set semantics, so asserting the
/// same triple twice has no effect.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    /// Subject of the statement
    pub subject: Node,

    /// Predicate
    pub predicate: Iri,

    /// Object of the statement
    pub object: Term,
}

impl Triple {
    /// Create a new triple
    pub fn new(subject: impl Into<Node>, predicate: Iri, object: impl Into<Term>) -> Self {
        Self {
            subject: subject.into(),
            predicate,
            object: object.into(),
        }
    }
}

impl fmt::Display for Triple {
    /// N-Triples form, without the trailing newline
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: scoped labels are stable for a given (scope, index)
        #[test]
        fn test_scoped_label_is_stable(path in "[a-z/]{1,40}", index in 0usize..1000) {
            let scope = Iri::new(format!("file:///{}", path));
            prop_assert_eq!(BlankNode::scoped(&scope, index), BlankNode::scoped(&scope, index));
        }

        /// Property: escaped literals never contain a raw newline or bare quote
        #[test]
        fn test_escape_removes_raw_control_chars(value in ".*") {
            let escaped = escape_literal(&value);
            prop_assert!(!escaped.contains('\n'));
            let unescaped_quotes = escaped
                .char_indices()
                .filter(|(i, c)| *c == '"' && !escaped[..*i].ends_with('\\'))
                .count();
            prop_assert_eq!(unescaped_quotes, 0);
        }
    }
}
