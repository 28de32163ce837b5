//! Profile module - output policy for source-vocabulary vs `ma:` properties

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Output profile
///
/// Decides, together with a field's [`Exactness`], whether the emitted
/// predicate is the `ma:` target property or a source-vocabulary property
/// declared as a sub-property of it:
/// - MaOnly: only `ma:` properties
/// - Default: `ma:` for exact matches, source properties for related ones
/// - Original: always source properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OutputProfile {
    /// Only `ma:` properties
    MaOnly,

    /// `ma:` for exact matches, sub-properties for related matches
    #[default]
    Default,

    /// Source-vocabulary sub-properties for everything
    Original,
}

impl OutputProfile {
    /// All profiles, in documentation order
    pub const ALL: [OutputProfile; 3] = [
        OutputProfile::MaOnly,
        OutputProfile::Default,
        OutputProfile::Original,
    ];

    /// Get the profile name as it is spelled on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputProfile::MaOnly => "ma-only",
            OutputProfile::Default => "default",
            OutputProfile::Original => "original",
        }
    }

    /// Parse a profile from its command-line spelling
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ma-only" => Some(OutputProfile::MaOnly),
            "default" => Some(OutputProfile::Default),
            "original" => Some(OutputProfile::Original),
            _ => None,
        }
    }

    /// Whether this profile may emit source-vocabulary properties at all
    pub fn uses_source_vocabulary(&self) -> bool {
        !matches!(self, OutputProfile::MaOnly)
    }
}

impl std::fmt::Display for OutputProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OutputProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid profile: {}", s))
    }
}

/// How closely a source field matches its target `ma:` property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exactness {
    /// The source field denotes the same concept as the target property
    Exact,

    /// The source field denotes a narrower or associated concept
    Related,
}
