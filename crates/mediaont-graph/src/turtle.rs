//! Turtle writer

use std::io::Write;

use mediaont_domain::term::escape_literal;
use mediaont_domain::vocab;
use mediaont_domain::{Iri, Literal, Node, Term};

use crate::{Graph, GraphError};

/// Write `graph` as Turtle, one block per subject
pub fn write_turtle<W: Write>(graph: &Graph, out: &mut W) -> Result<(), GraphError> {
    let mut prefixes = graph.prefixes().peekable();
    let has_prefixes = prefixes.peek().is_some();
    for (prefix, iri) in prefixes {
        writeln!(out, "@prefix {}: <{}> .", prefix, iri)?;
    }
    if has_prefixes && !graph.is_empty() {
        writeln!(out)?;
    }

    let rdf_type = vocab::rdf_type();
    let mut subject: Option<&Node> = None;
    let mut predicate: Option<&Iri> = None;

    for triple in graph.iter() {
        if subject != Some(&triple.subject) {
            if subject.is_some() {
                writeln!(out, " .\n")?;
            }
            write!(out, "{}", node(graph, &triple.subject))?;
            subject = Some(&triple.subject);
            predicate = None;
        }

        if predicate == Some(&triple.predicate) {
            write!(out, ",\n        {}", term(graph, &triple.object))?;
            continue;
        }
        let verb = if triple.predicate == rdf_type {
            "a".to_string()
        } else {
            iri(graph, &triple.predicate)
        };
        if predicate.is_some() {
            write!(out, " ;")?;
        }
        write!(out, "\n    {} {}", verb, term(graph, &triple.object))?;
        predicate = Some(&triple.predicate);
    }
    if subject.is_some() {
        writeln!(out, " .")?;
    }
    Ok(())
}

fn iri(graph: &Graph, iri: &Iri) -> String {
    graph.compact(iri).unwrap_or_else(|| iri.to_string())
}

fn node(graph: &Graph, node: &Node) -> String {
    match node {
        Node::Iri(value) => iri(graph, value),
        Node::Blank(blank) => blank.to_string(),
    }
}

fn term(graph: &Graph, term: &Term) -> String {
    match term {
        Term::Node(value) => node(graph, value),
        Term::Literal(value) => literal(graph, value),
    }
}

fn literal(graph: &Graph, literal: &Literal) -> String {
    let quoted = format!("\"{}\"", escape_literal(literal.lexical()));
    match (literal.language(), literal.datatype()) {
        (Some(language), _) => format!("{}@{}", quoted, language),
        (None, Some(datatype)) => format!("{}^^{}", quoted, iri(graph, datatype)),
        (None, None) => quoted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediaont_domain::traits::GraphSink;
    use mediaont_domain::{BlankNode, Namespace, Triple};

    fn sample() -> Graph {
        let mut graph = Graph::new();
        graph.bind(&Namespace::ma());
        graph.bind(&Namespace::xsd());
        let track = Iri::new("file:///music/a.mp3");
        let ma = Namespace::ma();
        let person = BlankNode::new("p0");
        for triple in [
            Triple::new(track.clone(), ma.term("title"), Literal::plain("Allegro")),
            Triple::new(
                track.clone(),
                ma.term("title"),
                Literal::with_language("Vif", Some("fr")),
            ),
            Triple::new(
                track.clone(),
                ma.term("duration"),
                Literal::typed("1.5", vocab::xsd_decimal()),
            ),
            Triple::new(track, ma.term("hasCreator"), person.clone()),
            Triple::new(person, vocab::rdfs_label(), Literal::plain("Alice \"A\"")),
        ] {
            graph.insert(triple).unwrap();
        }
        graph
    }

    #[test]
    fn test_prefixes_and_grouping() {
        let turtle = sample().to_turtle();
        assert!(turtle.starts_with("@prefix ma: <http://www.w3.org/ns/ma-ont#> .\n"));
        assert!(turtle.contains("<file:///music/a.mp3>\n    ma:duration \"1.5\"^^xsd:decimal ;"));
        assert!(turtle.contains("ma:title \"Allegro\",\n        \"Vif\"@fr"));
        assert!(turtle.contains("ma:hasCreator _:p0"));
        assert!(turtle.trim_end().ends_with('.'));
    }

    #[test]
    fn test_unbound_iris_are_written_in_full() {
        let turtle = sample().to_turtle();
        assert!(turtle
            .contains("<http://www.w3.org/2000/01/rdf-schema#label> \"Alice \\\"A\\\"\""));
    }

    #[test]
    fn test_rdf_type_is_abbreviated() {
        let mut graph = Graph::new();
        graph
            .insert(Triple::new(
                BlankNode::new("ontology"),
                vocab::rdf_type(),
                vocab::owl_ontology(),
            ))
            .unwrap();
        assert!(graph
            .to_turtle()
            .contains("_:ontology\n    a <http://www.w3.org/2002/07/owl#Ontology> ."));
    }

    #[test]
    fn test_empty_graph() {
        assert_eq!(Graph::new().to_turtle(), "");
    }
}
