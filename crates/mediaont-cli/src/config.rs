//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use mediaont_domain::{Namespace, OutputProfile};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Source vocabulary overrides
    #[serde(default)]
    pub vocabularies: Vocabularies,
}

/// Defaults for every conversion, overridden by command-line flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Output profile
    #[serde(default)]
    pub profile: OutputProfile,

    /// Extended mode
    #[serde(default)]
    pub extended: bool,

    /// Language tag for string literals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Emit the `owl:imports` header
    #[serde(default)]
    pub owl_import: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,
}

/// Namespace IRIs replacing the built-in source vocabularies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vocabularies {
    /// Namespace of ID3 frame properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id3: Option<String>,

    /// Namespace of EXIF tag properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exif: Option<String>,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Turtle
    Turtle,
    /// N-Triples
    Ntriples,
    /// JSON array of triples
    Json,
    /// Table of compacted triples
    Table,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".mediaont").join("config.toml"))
    }

    /// Load configuration from `explicit`, or from the default path.
    ///
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(CliError::Config(format!(
                    "Config file {} does not exist",
                    path.display()
                )));
            }
            Some(path) => path.to_path_buf(),
            None => Self::path()?,
        };

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            Self::from_toml(&contents)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        Ok(config)
    }
}

impl Vocabularies {
    /// Override for the rule set called `name`, if one is configured.
    pub fn namespace(&self, name: &str) -> Result<Option<Namespace>> {
        let iri = match name {
            "id3" => self.id3.as_deref(),
            "exif" => self.exif.as_deref(),
            _ => None,
        };
        iri.map(|iri| Namespace::new(name, iri).map_err(CliError::Config))
            .transpose()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            profile: OutputProfile::Default,
            extended: false,
            language: None,
            owl_import: false,
            format: OutputFormat::Turtle,
            color: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Turtle
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.settings.profile, OutputProfile::Default);
        assert_eq!(config.settings.format, OutputFormat::Turtle);
        assert!(config.settings.color);
        assert!(config.vocabularies.id3.is_none());
    }

    #[test]
    fn test_parse_settings() {
        let config = Config::from_toml(
            r#"
            [settings]
            profile = "original"
            extended = true
            language = "de"
            format = "ntriples"

            [vocabularies]
            id3 = "http://example.org/id3#"
            "#,
        )
        .unwrap();
        assert_eq!(config.settings.profile, OutputProfile::Original);
        assert!(config.settings.extended);
        assert_eq!(config.settings.language.as_deref(), Some("de"));
        assert_eq!(config.settings.format, OutputFormat::Ntriples);
        assert!(config.settings.color);

        let id3 = config.vocabularies.namespace("id3").unwrap().unwrap();
        assert_eq!(id3.as_str(), "http://example.org/id3#");
        assert!(config.vocabularies.namespace("exif").unwrap().is_none());
    }

    #[test]
    fn test_unknown_profile_is_rejected() {
        assert!(Config::from_toml("[settings]\nprofile = \"everything\"\n").is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings]\nowl_import = true\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(config.settings.owl_import);
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
