//! Integration tests for mediaont-graph
//!
//! These tests fill a graph the way the mapper does and check what lands
//! on disk.

use std::fs::{self, File};

use mediaont_domain::traits::GraphSink;
use mediaont_domain::{vocab, BlankNode, Iri, Literal, Namespace, Triple};
use mediaont_graph::{write_ntriples, write_turtle, Graph};
use tempfile::TempDir;

fn track_graph() -> Graph {
    let mut graph = Graph::new();
    graph.bind(&Namespace::new("", "file:///music/").unwrap());
    graph.bind(&Namespace::ma());
    graph.bind(&Namespace::xsd());
    graph.bind(&Namespace::id3());

    let track = Iri::new("file:///music/suite.mp3");
    let ma = Namespace::ma();
    let id3 = Namespace::id3();
    let album = BlankNode::scoped(&track, 0);

    let triples = [
        Triple::new(track.clone(), ma.term("title"), Literal::plain("Allegro")),
        Triple::new(track.clone(), id3.term("TIT1"), Literal::plain("Suite")),
        Triple::new(id3.term("TIT1"), vocab::rdfs_sub_property_of(), ma.term("title")),
        Triple::new(track.clone(), ma.term("isMemberOf"), album.clone()),
        Triple::new(album, vocab::rdfs_label(), Literal::plain("Suites")),
        Triple::new(track, ma.term("duration"), Literal::typed("1.5", vocab::xsd_decimal())),
    ];
    for triple in triples {
        graph.insert(triple).unwrap();
    }
    graph
}

#[test]
fn test_turtle_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.ttl");

    let graph = track_graph();
    let mut file = File::create(&path).unwrap();
    write_turtle(&graph, &mut file).unwrap();
    drop(file);

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("@prefix : <file:///music/> ."));
    assert!(text.contains(":suite.mp3\n"));
    assert!(text.contains("id3:TIT1 \"Suite\""));
    assert!(text
        .contains("id3:TIT1\n    <http://www.w3.org/2000/01/rdf-schema#subPropertyOf> ma:title ."));
    assert!(text.contains("\"1.5\"^^xsd:decimal"));
}

#[test]
fn test_ntriples_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.nt");

    let graph = track_graph();
    let mut file = File::create(&path).unwrap();
    write_ntriples(&graph, &mut file).unwrap();
    drop(file);

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), graph.len());
    assert!(text.lines().all(|line| line.ends_with(" .")));
}

#[test]
fn test_reinserting_changes_nothing() {
    let mut graph = track_graph();
    let before = graph.to_turtle();
    let again: Vec<Triple> = graph.iter().cloned().collect();
    for triple in again {
        assert!(!graph.insert(triple).unwrap());
    }
    assert_eq!(graph.to_turtle(), before);
}

#[test]
fn test_subjects() {
    let graph = track_graph();
    // track, album node, sub-property axiom subject
    assert_eq!(graph.subjects().len(), 3);
}
