//! Configuration for the Mapper

use mediaont_domain::OutputProfile;
use serde::{Deserialize, Serialize};

/// Configuration for the Mapper
///
/// Passed explicitly to every mapping call; nothing in the engine reads
/// global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapperConfig {
    /// Which properties end up in the output
    #[serde(default)]
    pub profile: OutputProfile,

    /// Enable behaviour beyond the baseline mapping (language URIs,
    /// `foaf:name` for people, synthesized titles, decimal GPS coordinates)
    #[serde(default)]
    pub extended: bool,

    /// Language tag applied to string literals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Emit an `owl:imports` statement for the media ontology
    #[serde(default)]
    pub owl_import: bool,
}

impl MapperConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(language) = &self.language {
            if !is_language_tag(language) {
                return Err(format!("'{}' is not a valid language tag", language));
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            profile: OutputProfile::Default,
            extended: false,
            language: None,
            owl_import: false,
        }
    }
}

/// BCP 47 shape check: alphanumeric subtags of 1 to 8 characters joined by
/// hyphens, the first one alphabetic
fn is_language_tag(tag: &str) -> bool {
    let mut subtags = tag.split('-');
    let primary_ok = subtags
        .next()
        .is_some_and(|s| (1..=8).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphabetic()));
    primary_ok
        && subtags.all(|s| {
            (1..=8).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphanumeric())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = MapperConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.profile, OutputProfile::Default);
        assert!(!config.extended);
    }

    #[test]
    fn test_language_validation() {
        let mut config = MapperConfig::default();
        for ok in ["en", "fr-CA", "zh-Hant-TW"] {
            config.language = Some(ok.to_string());
            assert!(config.validate().is_ok(), "{} should be accepted", ok);
        }
        for bad in ["", "en_US", "-en", "toolongsubtag", "1en"] {
            config.language = Some(bad.to_string());
            assert!(config.validate().is_err(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_toml_round_trip() {
        let config = MapperConfig {
            profile: OutputProfile::Original,
            extended: true,
            language: Some("en".to_string()),
            owl_import: true,
        };
        let toml_str = config.to_toml().unwrap();
        let parsed = MapperConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_profile_spelling_in_toml() {
        let parsed = MapperConfig::from_toml("profile = \"ma-only\"\nextended = true\n").unwrap();
        assert_eq!(parsed.profile, OutputProfile::MaOnly);
        assert!(parsed.extended);
        assert!(parsed.language.is_none());
    }

    #[test]
    fn test_invalid_language_in_toml() {
        assert!(MapperConfig::from_toml("language = \"en_US\"\n").is_err());
    }
}
