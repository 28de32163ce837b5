//! Per-file mapping driver

use std::path::Path;

use mediaont_domain::traits::{FieldLookup, GraphSink, MetadataReader};
use mediaont_domain::{vocab, BlankNode, Iri, Triple};
use tracing::{debug, info, warn};
use url::Url;

use crate::config::MapperConfig;
use crate::dispatcher::Emitter;
use crate::error::MapperError;
use crate::geo::add_location;
use crate::rules::RuleSet;
use crate::smart_title::add_smart_title;
use crate::types::{FileReport, FileStatus, ResolvedRule};

/// Maps the metadata of files onto the media ontology
///
/// Rules are resolved against the configuration once, when the mapper is
/// built; mapping a file only reads them.
#[derive(Debug, Clone)]
pub struct Mapper {
    config: MapperConfig,
    rules: RuleSet,
    resolved: Vec<ResolvedRule>,
}

impl Mapper {
    /// Create a mapper for one container format
    pub fn new(config: MapperConfig, rules: RuleSet) -> Result<Self, MapperError> {
        config.validate().map_err(MapperError::Config)?;
        let resolved = rules
            .rules()
            .iter()
            .map(|rule| ResolvedRule::resolve(*rule, config.extended))
            .collect();
        Ok(Self {
            config,
            rules,
            resolved,
        })
    }

    /// The configuration in use
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// The rule set in use
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Graph-level statements, emitted once per output graph
    ///
    /// With `owl_import` set this is the ontology header importing the media
    /// ontology; otherwise nothing.
    pub fn begin_graph<S>(&self, sink: &mut S) -> Result<(), MapperError>
    where
        S: GraphSink,
        S::Error: std::fmt::Display,
    {
        if !self.config.owl_import {
            return Ok(());
        }
        let ontology = BlankNode::new("ontology");
        for triple in [
            Triple::new(ontology.clone(), vocab::rdf_type(), vocab::owl_ontology()),
            Triple::new(ontology, vocab::owl_imports(), Iri::new(vocab::MA_ONTOLOGY)),
        ] {
            sink.insert(triple)
                .map_err(|e| MapperError::Sink(e.to_string()))?;
        }
        Ok(())
    }

    /// Map already decoded fields describing `resource`
    pub fn map_fields<S, L>(
        &self,
        resource: Iri,
        fields: &L,
        sink: &mut S,
    ) -> Result<FileReport, MapperError>
    where
        S: GraphSink,
        S::Error: std::fmt::Display,
        L: FieldLookup + ?Sized,
    {
        let mut report = FileReport::new(resource.clone(), FileStatus::Mapped);
        let mut emitter = Emitter::new(sink, &self.config, self.rules.vocabulary(), resource);

        for rule in &self.resolved {
            let Some(field) = fields.field(rule.rule.key) else {
                continue;
            };
            let outcome = emitter.add_metadata(field, rule)?;
            if outcome.values_mapped > 0 {
                report.fields_mapped += 1;
            }
            report.values_skipped += outcome.values_skipped;
        }

        if self.config.extended {
            if let Some(title) = self.rules.title() {
                add_smart_title(&mut emitter, title, fields)?;
            }
        }
        if let Some(geo) = self.rules.geo() {
            let axes = add_location(&mut emitter, geo, fields)?;
            debug!("{} GPS axes", axes);
        }

        report.triples_added = emitter.added();
        Ok(report)
    }

    /// Read `path` with `reader` and map whatever it finds
    ///
    /// A file the reader cannot parse is reported as unreadable and yields
    /// no triples; it is not an error.
    pub fn map_file<S, R>(
        &self,
        path: &Path,
        reader: &R,
        sink: &mut S,
    ) -> Result<FileReport, MapperError>
    where
        S: GraphSink,
        S::Error: std::fmt::Display,
        R: MetadataReader + ?Sized,
        R::Error: std::fmt::Display,
    {
        let resource = resource_iri(path)?;
        info!("Mapping {} ({})", path.display(), self.rules.name());

        let fields = match reader.read(path) {
            Ok(Some(fields)) => fields,
            Ok(None) => {
                info!("{}: no {} metadata", path.display(), self.rules.name());
                return Ok(FileReport::new(resource, FileStatus::NoMetadata));
            }
            Err(e) => {
                warn!("{}: skipped, {}", path.display(), e);
                return Ok(FileReport::new(resource, FileStatus::Unreadable(e.to_string())));
            }
        };

        debug!("{}: {} fields read", path.display(), fields.len());
        let report = self.map_fields(resource, &fields, sink)?;
        info!(
            "{}: {} fields mapped, {} values skipped, {} triples",
            path.display(),
            report.fields_mapped,
            report.values_skipped,
            report.triples_added
        );
        Ok(report)
    }
}

/// `file://` URL of the absolute form of `path`
pub fn resource_iri(path: &Path) -> Result<Iri, MapperError> {
    let absolute = std::path::absolute(path)
        .map_err(|e| MapperError::InvalidPath(format!("{}: {}", path.display(), e)))?;
    let url = Url::from_file_path(&absolute)
        .map_err(|_| MapperError::InvalidPath(absolute.display().to_string()))?;
    Ok(Iri::new(url.as_str()))
}

/// `file://` URL of the directory `path`, with a trailing slash
///
/// Used as the base namespace of the output graph.
pub fn base_iri(path: &Path) -> Result<Iri, MapperError> {
    let absolute = std::path::absolute(path)
        .map_err(|e| MapperError::InvalidPath(format!("{}: {}", path.display(), e)))?;
    let url = Url::from_directory_path(&absolute)
        .map_err(|_| MapperError::InvalidPath(absolute.display().to_string()))?;
    Ok(Iri::new(url.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_iri_is_absolute_file_url() {
        let iri = resource_iri(Path::new("music/track one.mp3")).unwrap();
        assert!(iri.as_str().starts_with("file:///"));
        assert!(iri.as_str().ends_with("/music/track%20one.mp3"));
    }

    #[test]
    fn test_base_iri_has_trailing_slash() {
        let iri = base_iri(Path::new(".")).unwrap();
        assert!(iri.as_str().starts_with("file:///"));
        assert!(iri.as_str().ends_with('/'));
    }

    #[test]
    fn test_invalid_language_is_rejected() {
        let config = MapperConfig {
            language: Some("en_US".to_string()),
            ..MapperConfig::default()
        };
        assert!(matches!(
            Mapper::new(config, RuleSet::id3()),
            Err(MapperError::Config(_))
        ));
    }
}
