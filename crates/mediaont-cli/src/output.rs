//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use mediaont_domain::{Iri, Node, Term};
use mediaont_graph::Graph;
use serde_json::{json, Value};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a whole graph.
    pub fn format_graph(&self, graph: &Graph) -> Result<String> {
        match self.format {
            OutputFormat::Turtle => Ok(graph.to_turtle()),
            OutputFormat::Ntriples => Ok(graph.to_ntriples()),
            OutputFormat::Json => self.format_graph_json(graph),
            OutputFormat::Table => Ok(self.format_graph_table(graph)),
        }
    }

    /// Format triples as a JSON array.
    fn format_graph_json(&self, graph: &Graph) -> Result<String> {
        let triples: Vec<Value> = graph
            .iter()
            .map(|t| {
                json!({
                    "subject": node_json(&t.subject),
                    "predicate": t.predicate.as_str(),
                    "object": term_json(&t.object),
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&triples)?)
    }

    /// Format triples as a table, with prefixed names where possible.
    fn format_graph_table(&self, graph: &Graph) -> String {
        if graph.is_empty() {
            return self.colorize("No triples.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Subject", "Predicate", "Object"]);

        for triple in graph.iter() {
            builder.push_record([
                node_cell(graph, &triple.subject),
                iri_cell(graph, &triple.predicate),
                match &triple.object {
                    Term::Node(node) => node_cell(graph, node),
                    Term::Literal(literal) => literal.to_string(),
                },
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn node_json(node: &Node) -> Value {
    match node {
        Node::Iri(iri) => json!({ "type": "iri", "value": iri.as_str() }),
        Node::Blank(blank) => json!({ "type": "blank", "value": blank.label() }),
    }
}

fn term_json(term: &Term) -> Value {
    match term {
        Term::Node(node) => node_json(node),
        Term::Literal(literal) => {
            let mut value = json!({ "type": "literal", "value": literal.lexical() });
            if let Some(language) = literal.language() {
                value["language"] = json!(language);
            }
            if let Some(datatype) = literal.datatype() {
                value["datatype"] = json!(datatype.as_str());
            }
            value
        }
    }
}

fn iri_cell(graph: &Graph, iri: &Iri) -> String {
    graph.compact(iri).unwrap_or_else(|| iri.to_string())
}

fn node_cell(graph: &Graph, node: &Node) -> String {
    match node {
        Node::Iri(iri) => iri_cell(graph, iri),
        Node::Blank(blank) => blank.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediaont_domain::traits::GraphSink;
    use mediaont_domain::{vocab, BlankNode, Literal, Namespace, Triple};

    fn create_test_graph() -> Graph {
        let mut graph = Graph::new();
        graph.bind(&Namespace::ma());
        graph.bind(&Namespace::xsd());
        let track = Iri::new("file:///music/a.mp3");
        let person = BlankNode::new("p0");
        for triple in [
            Triple::new(
                track.clone(),
                Namespace::ma().term("title"),
                Literal::with_language("Allegro", Some("it")),
            ),
            Triple::new(
                track.clone(),
                Namespace::ma().term("releaseDate"),
                Literal::typed("2011", vocab::xsd_date()),
            ),
            Triple::new(track, Namespace::ma().term("hasCreator"), person.clone()),
            Triple::new(person, vocab::rdfs_label(), Literal::plain("Alice")),
        ] {
            graph.insert(triple).unwrap();
        }
        graph
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_graph(&create_test_graph()).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.len(), 4);

        let title = parsed
            .iter()
            .find(|t| t["predicate"] == "http://www.w3.org/ns/ma-ont#title")
            .unwrap();
        assert_eq!(title["subject"]["value"], "file:///music/a.mp3");
        assert_eq!(title["object"]["language"], "it");

        let creator = parsed
            .iter()
            .find(|t| t["predicate"] == "http://www.w3.org/ns/ma-ont#hasCreator")
            .unwrap();
        assert_eq!(creator["object"]["type"], "blank");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_graph(&create_test_graph()).unwrap();
        assert!(output.contains("Subject"));
        assert!(output.contains("ma:hasCreator"));
        assert!(output.contains("\"2011\"^^<http://www.w3.org/2001/XMLSchema#date>"));
    }

    #[test]
    fn test_empty_graph_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_graph(&Graph::new()).unwrap();
        assert!(output.contains("No triples"));
    }

    #[test]
    fn test_rdf_formats() {
        let graph = create_test_graph();
        let turtle = Formatter::new(OutputFormat::Turtle, false).format_graph(&graph).unwrap();
        assert!(turtle.starts_with("@prefix ma:"));
        let ntriples = Formatter::new(OutputFormat::Ntriples, false).format_graph(&graph).unwrap();
        assert_eq!(ntriples.lines().count(), 4);
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("test"), "⚠ test");
    }
}
