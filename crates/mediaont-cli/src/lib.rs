//! mediaont CLI library.
//!
//! This library provides the pieces of the `mediaont` command-line tool:
//! argument parsing, the configuration file, batch conversion of media files
//! into one graph, and output formatting.

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use config::{Config, OutputFormat};
pub use convert::{execute_convert, Conversion};
pub use error::{CliError, Result};
pub use output::Formatter;

/// Description of profiles and extended mode, printed by `--long-help`.
pub const PROFILES_HELP: &str = "\
Profiles:
  default   ma: properties for exact matches; related matches use a property
            of the source vocabulary (id3:, exif:) declared as an
            rdfs:subPropertyOf the ma: property
  ma-only   only ma: properties
  original  source-vocabulary properties for every field, each declared as
            an rdfs:subPropertyOf its ma: property

Extended mode (-x) adds metadata the Media Ontology does not specify:
  * a lexvo URI for the language, instead of an anonymous node
  * foaf:name instead of rdfs:label for people
  * a title synthesized from the content group, title and subtitle frames
  * GPS coordinates as decimal degrees on a location node

See http://www.w3.org/TR/mediaont-10/
";
