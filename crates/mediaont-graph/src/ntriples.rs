//! N-Triples writer

use std::io::Write;

use crate::{Graph, GraphError};

/// Write `graph` as N-Triples, one triple per line
///
/// Prefix bindings are ignored; every IRI is written in full.
pub fn write_ntriples<W: Write>(graph: &Graph, out: &mut W) -> Result<(), GraphError> {
    for triple in graph.iter() {
        writeln!(out, "{}", triple)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use mediaont_domain::traits::GraphSink;
    use mediaont_domain::{vocab, Iri, Literal, Namespace, Triple};

    use crate::Graph;

    #[test]
    fn test_one_line_per_triple() {
        let mut graph = Graph::new();
        graph.bind(&Namespace::ma());
        let track = Iri::new("file:///a.mp3");
        graph
            .insert(Triple::new(
                track.clone(),
                Namespace::ma().term("title"),
                Literal::plain("A\nB"),
            ))
            .unwrap();
        graph
            .insert(Triple::new(
                track,
                Namespace::ma().term("releaseDate"),
                Literal::typed("2011-03-04", vocab::xsd_date()),
            ))
            .unwrap();

        let text = graph.to_ntriples();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "<file:///a.mp3> <http://www.w3.org/ns/ma-ont#releaseDate> \"2011-03-04\"^^<http://www.w3.org/2001/XMLSchema#date> .",
                "<file:///a.mp3> <http://www.w3.org/ns/ma-ont#title> \"A\\nB\" .",
            ]
        );
    }
}
