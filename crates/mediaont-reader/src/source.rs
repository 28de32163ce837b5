//! Reader selection

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use mediaont_domain::traits::MetadataReader;
use mediaont_domain::FieldMap;

use crate::error::ReaderError;
use crate::exif_data::ExifReader;
use crate::id3_tag::Id3Reader;

const ID3_EXTENSIONS: &[&str] = &["mp3", "mp2", "mpga"];
const EXIF_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "jpe", "tif", "tiff", "heic", "heif", "avif", "png", "webp",
];

/// Which container a file is read as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// Decide from the file extension
    #[default]
    Auto,

    /// ID3v2 tag
    Id3,

    /// EXIF attributes
    Exif,
}

impl SourceKind {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Auto => "auto",
            SourceKind::Id3 => "id3",
            SourceKind::Exif => "exif",
        }
    }

    /// The concrete kind for `path`; `None` when auto-detection finds no
    /// match
    pub fn resolve(self, path: &Path) -> Option<SourceKind> {
        match self {
            SourceKind::Auto => detect(path),
            kind => Some(kind),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(SourceKind::Auto),
            "id3" => Ok(SourceKind::Id3),
            "exif" => Ok(SourceKind::Exif),
            _ => Err(format!("Unknown source '{}' (expected auto, id3 or exif)", s)),
        }
    }
}

fn detect(path: &Path) -> Option<SourceKind> {
    let extension = path.extension()?.to_str()?.to_lowercase();
    if ID3_EXTENSIONS.contains(&extension.as_str()) {
        Some(SourceKind::Id3)
    } else if EXIF_EXTENSIONS.contains(&extension.as_str()) {
        Some(SourceKind::Exif)
    } else {
        None
    }
}

/// Either reader, chosen per file
#[derive(Debug, Clone, Copy)]
pub enum AnyReader {
    /// ID3 reader
    Id3(Id3Reader),

    /// EXIF reader
    Exif(ExifReader),
}

impl AnyReader {
    /// Reader for a concrete kind; `Auto` has none
    pub fn for_kind(kind: SourceKind) -> Option<Self> {
        match kind {
            SourceKind::Auto => None,
            SourceKind::Id3 => Some(AnyReader::Id3(Id3Reader::new())),
            SourceKind::Exif => Some(AnyReader::Exif(ExifReader::new())),
        }
    }

    /// Reader for `path` under `kind`
    pub fn for_path(kind: SourceKind, path: &Path) -> Result<Self, ReaderError> {
        kind.resolve(path)
            .and_then(Self::for_kind)
            .ok_or_else(|| ReaderError::Unsupported(path.display().to_string()))
    }

    /// Kind of container this reader handles
    pub fn kind(&self) -> SourceKind {
        match self {
            AnyReader::Id3(_) => SourceKind::Id3,
            AnyReader::Exif(_) => SourceKind::Exif,
        }
    }
}

impl MetadataReader for AnyReader {
    type Error = ReaderError;

    fn read(&self, path: &Path) -> Result<Option<FieldMap>, Self::Error> {
        match self {
            AnyReader::Id3(reader) => reader.read(path),
            AnyReader::Exif(reader) => reader.read(path),
        }
    }
}
