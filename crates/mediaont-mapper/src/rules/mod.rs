//! Static rule tables, one per container format

mod exif;
mod id3;

use mediaont_domain::Namespace;

use crate::geo::GeoFields;
use crate::smart_title::TitleFields;
use crate::types::MappingRule;

pub use self::exif::EXIF_RULES;
pub use self::id3::ID3_RULES;

/// Everything needed to map one container format
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: &'static str,
    vocabulary: Namespace,
    rules: &'static [MappingRule],
    title: Option<TitleFields>,
    geo: Option<GeoFields>,
}

impl RuleSet {
    /// ID3v2 frames
    pub fn id3() -> Self {
        Self {
            name: "id3",
            vocabulary: Namespace::id3(),
            rules: ID3_RULES,
            title: Some(id3::TITLE_FIELDS),
            geo: None,
        }
    }

    /// EXIF tags
    pub fn exif() -> Self {
        Self {
            name: "exif",
            vocabulary: Namespace::exif(),
            rules: EXIF_RULES,
            title: None,
            geo: Some(exif::GEO_FIELDS),
        }
    }

    /// Replace the source vocabulary namespace
    pub fn with_vocabulary(mut self, vocabulary: Namespace) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Name of the container format
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Namespace of the source properties
    pub fn vocabulary(&self) -> &Namespace {
        &self.vocabulary
    }

    /// Field rules
    pub fn rules(&self) -> &'static [MappingRule] {
        self.rules
    }

    /// Fields a smart title is synthesized from
    pub fn title(&self) -> Option<&TitleFields> {
        self.title.as_ref()
    }

    /// GPS fields
    pub fn geo(&self) -> Option<&GeoFields> {
        self.geo.as_ref()
    }
}
