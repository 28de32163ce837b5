//! Vocabulary module - namespaces and the well-known terms used in output

use crate::term::Iri;

/// Ontology for Media Resources namespace URI.
pub const MA: &str = "http://www.w3.org/ns/ma-ont#";

/// Ontology document imported with `--owl-import`.
pub const MA_ONTOLOGY: &str = "http://www.w3.org/ns/ma-ont";

/// RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// RDF Schema namespace.
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";

/// OWL namespace.
pub const OWL: &str = "http://www.w3.org/2002/07/owl#";

/// XML Schema namespace.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// FOAF namespace (person names in extended mode).
pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";

/// Lexvo ISO 639-3 namespace (language URIs in extended mode).
pub const LEXVO: &str = "http://lexvo.org/id/iso639-3/";

/// Default namespace for ID3 frame properties.
pub const ID3: &str = "urn:mediaont:vocab:id3#";

/// Default namespace for EXIF tag properties.
pub const EXIF: &str = "urn:mediaont:vocab:exif#";

/// A prefix bound to a namespace IRI
///
/// Terms are minted by appending a local name to the namespace IRI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace {
    prefix: String,
    iri: String,
}

impl Namespace {
    /// Create a new namespace
    ///
    /// # Errors
    /// Returns error if the IRI is empty, or does not end in a separator
    /// (`#`, `/` or `:`) that local names can be appended to
    pub fn new(prefix: impl Into<String>, iri: impl Into<String>) -> Result<Self, String> {
        let prefix = prefix.into();
        let iri = iri.into();

        if iri.is_empty() {
            return Err("Namespace IRI cannot be empty".to_string());
        }
        if !iri.ends_with(['#', '/', ':']) {
            return Err(format!(
                "Namespace IRI '{}' must end with '#', '/' or ':'",
                iri
            ));
        }
        if prefix.contains(':') || prefix.contains(char::is_whitespace) {
            return Err(format!("Invalid namespace prefix '{}'", prefix));
        }

        Ok(Self { prefix, iri })
    }

    /// Namespace for one of the crate's constant IRIs; constants always pass
    /// validation
    fn known(prefix: &str, iri: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            iri: iri.to_string(),
        }
    }

    /// The `ma:` namespace
    pub fn ma() -> Self {
        Self::known("ma", MA)
    }

    /// The `rdf:` namespace
    pub fn rdf() -> Self {
        Self::known("rdf", RDF)
    }

    /// The `rdfs:` namespace
    pub fn rdfs() -> Self {
        Self::known("rdfs", RDFS)
    }

    /// The `owl:` namespace
    pub fn owl() -> Self {
        Self::known("owl", OWL)
    }

    /// The `xsd:` namespace
    pub fn xsd() -> Self {
        Self::known("xsd", XSD)
    }

    /// The `foaf:` namespace
    pub fn foaf() -> Self {
        Self::known("foaf", FOAF)
    }

    /// The `lexvo:` namespace
    pub fn lexvo() -> Self {
        Self::known("lexvo", LEXVO)
    }

    /// The default `id3:` source vocabulary
    pub fn id3() -> Self {
        Self::known("id3", ID3)
    }

    /// The default `exif:` source vocabulary
    pub fn exif() -> Self {
        Self::known("exif", EXIF)
    }

    /// Get the prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Get the namespace IRI
    pub fn as_str(&self) -> &str {
        &self.iri
    }

    /// Mint the term `local` in this namespace
    pub fn term(&self, local: &str) -> Iri {
        Iri::new(format!("{}{}", self.iri, local))
    }
}

/// `rdf:type`
pub fn rdf_type() -> Iri {
    Namespace::rdf().term("type")
}

/// `rdfs:label`
pub fn rdfs_label() -> Iri {
    Namespace::rdfs().term("label")
}

/// `rdfs:subPropertyOf`
pub fn rdfs_sub_property_of() -> Iri {
    Namespace::rdfs().term("subPropertyOf")
}

/// `owl:Ontology`
pub fn owl_ontology() -> Iri {
    Namespace::owl().term("Ontology")
}

/// `owl:imports`
pub fn owl_imports() -> Iri {
    Namespace::owl().term("imports")
}

/// `foaf:name`
pub fn foaf_name() -> Iri {
    Namespace::foaf().term("name")
}

/// `xsd:date`
pub fn xsd_date() -> Iri {
    Namespace::xsd().term("date")
}

/// `xsd:decimal`
pub fn xsd_decimal() -> Iri {
    Namespace::xsd().term("decimal")
}

/// `xsd:double`
pub fn xsd_double() -> Iri {
    Namespace::xsd().term("double")
}

/// `ma:` local names used by the rule tables.
pub mod ma {
    /// Title of the resource.
    pub const TITLE: &str = "title";
    /// Language of the resource.
    pub const HAS_LANGUAGE: &str = "hasLanguage";
    /// Creator (author, lead artist, photographer).
    pub const HAS_CREATOR: &str = "hasCreator";
    /// Contributor (performer, conductor, remixer, ...).
    pub const HAS_CONTRIBUTOR: &str = "hasContributor";
    /// Publisher.
    pub const HAS_PUBLISHER: &str = "hasPublisher";
    /// Genre.
    pub const HAS_GENRE: &str = "hasGenre";
    /// Keyword.
    pub const HAS_KEYWORD: &str = "hasKeyword";
    /// Collection the resource belongs to.
    pub const IS_MEMBER_OF: &str = "isMemberOf";
    /// Free-text description.
    pub const DESCRIPTION: &str = "description";
    /// Copyright statement.
    pub const COPYRIGHT: &str = "copyright";
    /// Recording date.
    pub const RECORD_DATE: &str = "recordDate";
    /// Release date.
    pub const RELEASE_DATE: &str = "releaseDate";
    /// Creation date.
    pub const CREATION_DATE: &str = "creationDate";
    /// Last edit date.
    pub const EDIT_DATE: &str = "editDate";
    /// Duration in seconds.
    pub const DURATION: &str = "duration";
    /// Frame width in pixels.
    pub const FRAME_WIDTH: &str = "frameWidth";
    /// Frame height in pixels.
    pub const FRAME_HEIGHT: &str = "frameHeight";
    /// Compression scheme.
    pub const HAS_COMPRESSION: &str = "hasCompression";
    /// Location related to the resource.
    pub const HAS_RELATED_LOCATION: &str = "hasRelatedLocation";
    /// Latitude of a location, decimal degrees.
    pub const LOCATION_LATITUDE: &str = "locationLatitude";
    /// Longitude of a location, decimal degrees.
    pub const LOCATION_LONGITUDE: &str = "locationLongitude";
    /// Altitude of a location, metres.
    pub const LOCATION_ALTITUDE: &str = "locationAltitude";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_creation() {
        let ns = Namespace::new("id3", "urn:example:id3#").unwrap();
        assert_eq!(ns.prefix(), "id3");
        assert_eq!(ns.term("TIT2").as_str(), "urn:example:id3#TIT2");
    }

    #[test]
    fn test_namespace_validation() {
        assert!(Namespace::new("x", "").is_err());
        assert!(Namespace::new("x", "http://example.org/vocab").is_err());
        assert!(Namespace::new("a:b", "http://example.org/").is_err());
        assert!(Namespace::new("", "http://example.org/").is_ok());
    }

    #[test]
    fn test_well_known_terms() {
        assert_eq!(
            rdfs_label().as_str(),
            "http://www.w3.org/2000/01/rdf-schema#label"
        );
        assert_eq!(foaf_name().as_str(), "http://xmlns.com/foaf/0.1/name");
        assert_eq!(
            xsd_decimal().as_str(),
            "http://www.w3.org/2001/XMLSchema#decimal"
        );
    }
}
