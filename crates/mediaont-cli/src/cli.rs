//! CLI argument definitions and parsing.

use std::path::PathBuf;

use clap::Parser;
use mediaont_domain::OutputProfile;
use mediaont_mapper::MapperConfig;
use mediaont_reader::SourceKind;

use crate::config::{OutputFormat, Settings};

/// mediaont - Convert embedded media metadata into Media Ontology RDF.
#[derive(Debug, Parser)]
#[command(name = "mediaont")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print the description of profiles and extended mode, then exit
    #[arg(short = 'H', long)]
    pub long_help: bool,

    /// Declare an owl:imports of the media ontology
    #[arg(short, long)]
    pub owl_import: bool,

    /// Which properties end up in the output
    #[arg(short, long, value_enum)]
    pub profile: Option<ProfileArg>,

    /// Language URIs, foaf:name, smart titles and decimal GPS coordinates
    #[arg(short = 'x', long)]
    pub extended: bool,

    /// Language tag for string literals (e.g. en, fr-CA)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<CliFormat>,

    /// Metadata container to read
    #[arg(short, long, value_enum, default_value = "auto")]
    pub source: SourceArg,

    /// Configuration file path
    #[arg(short, long, env = "MEDIAONT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Media files to convert
    pub files: Vec<PathBuf>,
}

/// Output profile argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ProfileArg {
    /// Only ma: properties
    MaOnly,
    /// ma: for exact matches, source properties for related ones
    Default,
    /// Source properties for everything
    Original,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Turtle (default)
    Turtle,
    /// N-Triples
    Ntriples,
    /// JSON array of triples
    Json,
    /// Table of compacted triples
    Table,
}

/// Source container argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SourceArg {
    /// Decide by file extension
    Auto,
    /// ID3v2 tags
    Id3,
    /// EXIF attributes
    Exif,
}

impl Cli {
    /// Mapper configuration: flags over the config file settings.
    ///
    /// Boolean flags can only switch a behaviour on.
    pub fn mapper_config(&self, settings: &Settings) -> MapperConfig {
        MapperConfig {
            profile: self.profile.map(Into::into).unwrap_or(settings.profile),
            extended: self.extended || settings.extended,
            language: self.language.clone().or_else(|| settings.language.clone()),
            owl_import: self.owl_import || settings.owl_import,
        }
    }
}

impl From<ProfileArg> for OutputProfile {
    fn from(profile: ProfileArg) -> Self {
        match profile {
            ProfileArg::MaOnly => OutputProfile::MaOnly,
            ProfileArg::Default => OutputProfile::Default,
            ProfileArg::Original => OutputProfile::Original,
        }
    }
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Turtle => OutputFormat::Turtle,
            CliFormat::Ntriples => OutputFormat::Ntriples,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Table => OutputFormat::Table,
        }
    }
}

impl From<SourceArg> for SourceKind {
    fn from(source: SourceArg) -> Self {
        match source {
            SourceArg::Auto => SourceKind::Auto,
            SourceArg::Id3 => SourceKind::Id3,
            SourceArg::Exif => SourceKind::Exif,
        }
    }
}
