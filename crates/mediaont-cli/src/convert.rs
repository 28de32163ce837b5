//! Conversion of a batch of files into one graph.

use std::env;
use std::path::PathBuf;

use mediaont_domain::Namespace;
use mediaont_graph::Graph;
use mediaont_mapper::{
    base_iri, resource_iri, FileReport, FileStatus, Mapper, MapperConfig, RuleSet,
};
use mediaont_reader::{AnyReader, SourceKind};
use tracing::{info, warn};

use crate::config::Vocabularies;
use crate::error::{CliError, Result};

/// Graph built from a batch, plus what happened to each file.
#[derive(Debug)]
pub struct Conversion {
    /// All triples of the batch
    pub graph: Graph,

    /// One report per input file, in argument order
    pub reports: Vec<FileReport>,
}

impl Conversion {
    /// Reports of files that yielded nothing because they could not be read
    pub fn unreadable(&self) -> impl Iterator<Item = (&FileReport, &str)> {
        self.reports.iter().filter_map(|report| match &report.status {
            FileStatus::Unreadable(reason) => Some((report, reason.as_str())),
            _ => None,
        })
    }
}

/// Convert `files` into a single graph.
///
/// Files are read as `source`; with [`SourceKind::Auto`] the reader is
/// chosen by extension. A file matching no reader, or one whose mapping
/// fails, is reported as unreadable and the batch carries on.
pub fn execute_convert(
    files: &[PathBuf],
    source: SourceKind,
    config: &MapperConfig,
    vocabularies: &Vocabularies,
) -> Result<Conversion> {
    let id3 = mapper_for(RuleSet::id3(), config, vocabularies)?;
    let exif = mapper_for(RuleSet::exif(), config, vocabularies)?;

    let mut graph = Graph::new();
    bind_namespaces(&mut graph, config, [&id3, &exif])?;
    id3.begin_graph(&mut graph)?;

    let mut reports = Vec::with_capacity(files.len());
    for path in files {
        let reader = match AnyReader::for_path(source, path) {
            Ok(reader) => reader,
            Err(e) => {
                warn!("{}: skipped, {}", path.display(), e);
                reports.push(FileReport::new(
                    resource_iri(path)?,
                    FileStatus::Unreadable(e.to_string()),
                ));
                continue;
            }
        };
        let mapper = match reader.kind() {
            SourceKind::Exif => &exif,
            _ => &id3,
        };
        match mapper.map_file(path, &reader, &mut graph) {
            Ok(report) => reports.push(report),
            Err(e) => {
                warn!("{}: mapping stopped, {}", path.display(), e);
                reports.push(FileReport::new(
                    resource_iri(path)?,
                    FileStatus::Unreadable(e.to_string()),
                ));
            }
        }
    }

    info!("{} files, {} triples", reports.len(), graph.len());
    Ok(Conversion { graph, reports })
}

fn mapper_for(
    rules: RuleSet,
    config: &MapperConfig,
    vocabularies: &Vocabularies,
) -> Result<Mapper> {
    let rules = match vocabularies.namespace(rules.name())? {
        Some(namespace) => rules.with_vocabulary(namespace),
        None => rules,
    };
    Ok(Mapper::new(config.clone(), rules)?)
}

/// Prefixes for the output: the working directory as the empty prefix, the
/// vocabularies the mapping can emit, and nothing else.
fn bind_namespaces<'a>(
    graph: &mut Graph,
    config: &MapperConfig,
    mappers: impl IntoIterator<Item = &'a Mapper>,
) -> Result<()> {
    let base = base_iri(&env::current_dir()?)?;
    let base = Namespace::new("", base.as_str()).map_err(CliError::Config)?;
    graph.bind(&base);

    for namespace in [
        Namespace::ma(),
        Namespace::owl(),
        Namespace::xsd(),
        Namespace::rdf(),
        Namespace::rdfs(),
    ] {
        graph.bind(&namespace);
    }
    if config.extended {
        graph.bind(&Namespace::foaf());
        graph.bind(&Namespace::lexvo());
    }
    if config.profile.uses_source_vocabulary() {
        for mapper in mappers {
            graph.bind(mapper.rules().vocabulary());
        }
    }
    Ok(())
}
