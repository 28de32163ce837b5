//! End-to-end conversion of files on disk

use std::fs;

use id3::{Tag, TagLike, Version};
use mediaont_cli::config::Vocabularies;
use mediaont_cli::{execute_convert, Formatter, OutputFormat};
use mediaont_domain::OutputProfile;
use mediaont_mapper::{FileStatus, MapperConfig};
use mediaont_reader::SourceKind;
use tempfile::TempDir;

fn write_track(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("suite.mp3");
    fs::write(&path, b"").unwrap();

    let mut tag = Tag::new();
    tag.set_text("TIT1", "Suite");
    tag.set_title("Allegro");
    tag.set_text("TIT3", "Live");
    tag.set_text("TPE1", "Alice");
    tag.set_text("TCOM", "Bob");
    tag.write_to_path(&path, Version::Id3v24).unwrap();
    path
}

#[test]
fn test_default_profile() {
    let dir = TempDir::new().unwrap();
    let path = write_track(&dir);

    let conversion = execute_convert(
        &[path],
        SourceKind::Auto,
        &MapperConfig::default(),
        &Vocabularies::default(),
    )
    .unwrap();
    assert_eq!(conversion.reports[0].status, FileStatus::Mapped);

    let ntriples = conversion.graph.to_ntriples();
    assert!(ntriples.contains("<http://www.w3.org/ns/ma-ont#title> \"Allegro\" ."));
    // related match: composer through a sub-property of ma:hasCreator
    assert!(ntriples.contains(
        "<urn:mediaont:vocab:id3#TCOM> <http://www.w3.org/2000/01/rdf-schema#subPropertyOf> <http://www.w3.org/ns/ma-ont#hasCreator> ."
    ));
    // no smart title outside extended mode
    assert!(!ntriples.contains("Suite - Allegro"));
}

#[test]
fn test_extended_ma_only() {
    let dir = TempDir::new().unwrap();
    let path = write_track(&dir);
    let config = MapperConfig {
        profile: OutputProfile::MaOnly,
        extended: true,
        ..MapperConfig::default()
    };

    let conversion =
        execute_convert(&[path], SourceKind::Id3, &config, &Vocabularies::default()).unwrap();
    let ntriples = conversion.graph.to_ntriples();

    assert!(ntriples.contains("\"Suite - Allegro (Live)\""));
    assert!(ntriples.contains("<http://xmlns.com/foaf/0.1/name> \"Alice\" ."));
    assert!(!ntriples.contains("subPropertyOf> <http://www.w3.org/ns/ma-ont#hasCreator>"));
}

#[test]
fn test_batch_with_unreadable_file() {
    let dir = TempDir::new().unwrap();
    let track = write_track(&dir);
    let broken = dir.path().join("broken.jpg");
    fs::write(&broken, b"this is not an image").unwrap();

    let conversion = execute_convert(
        &[broken, track],
        SourceKind::Auto,
        &MapperConfig::default(),
        &Vocabularies::default(),
    )
    .unwrap();

    assert_eq!(conversion.reports.len(), 2);
    assert_eq!(conversion.unreadable().count(), 1);
    assert!(!conversion.graph.is_empty());
}

#[test]
fn test_odd_language_code_keeps_the_batch() {
    let dir = TempDir::new().unwrap();
    let good = write_track(&dir);
    let odd = dir.path().join("odd.mp3");
    fs::write(&odd, b"").unwrap();
    let mut tag = Tag::new();
    tag.set_title("Adagio");
    tag.set_text("TLAN", "en gb");
    tag.write_to_path(&odd, Version::Id3v24).unwrap();

    let config = MapperConfig {
        extended: true,
        ..MapperConfig::default()
    };
    let conversion = execute_convert(
        &[good, odd],
        SourceKind::Auto,
        &config,
        &Vocabularies::default(),
    )
    .unwrap();

    assert_eq!(conversion.unreadable().count(), 0);
    let ntriples = conversion.graph.to_ntriples();
    assert!(ntriples.contains("\"Allegro\""));
    assert!(ntriples.contains("<http://lexvo.org/id/iso639-3/en+gb>"));
}

#[test]
fn test_failed_mapping_is_reported_per_file() {
    let dir = TempDir::new().unwrap();
    let track = write_track(&dir);
    // accepted as a namespace, but no graph can hold its properties
    let vocabularies = Vocabularies {
        id3: Some("urn:my vocab:id3#".to_string()),
        exif: None,
    };

    let conversion = execute_convert(
        &[track],
        SourceKind::Auto,
        &MapperConfig::default(),
        &vocabularies,
    )
    .unwrap();

    let unreadable: Vec<_> = conversion.unreadable().collect();
    assert_eq!(unreadable.len(), 1);
    assert!(unreadable[0].1.contains("Invalid IRI"));
}

#[test]
fn test_turtle_output() {
    let dir = TempDir::new().unwrap();
    let path = write_track(&dir);

    let conversion = execute_convert(
        &[path],
        SourceKind::Auto,
        &MapperConfig::default(),
        &Vocabularies::default(),
    )
    .unwrap();
    let turtle = Formatter::new(OutputFormat::Turtle, false)
        .format_graph(&conversion.graph)
        .unwrap();

    assert!(turtle.contains("@prefix ma: <http://www.w3.org/ns/ma-ont#> ."));
    assert!(turtle.contains("ma:title \"Allegro\""));
}
