//! ID3v2 tags

use std::path::Path;

use id3::frame::Content;
use id3::{ErrorKind, Tag};
use mediaont_domain::traits::MetadataReader;
use mediaont_domain::{FieldMap, MetadataField};
use tracing::debug;

use crate::error::ReaderError;

/// Reads the ID3v2 tag at the start of an MP3 file
#[derive(Debug, Clone, Copy, Default)]
pub struct Id3Reader;

impl Id3Reader {
    /// Create a new reader
    pub fn new() -> Self {
        Self
    }
}

impl MetadataReader for Id3Reader {
    type Error = ReaderError;

    fn read(&self, path: &Path) -> Result<Option<FieldMap>, Self::Error> {
        match Tag::read_from_path(path) {
            Ok(tag) => Ok(Some(fields_from_tag(&tag))),
            Err(e) if is_missing_tag(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// No tag at all, or a file too short to hold one
fn is_missing_tag(error: &id3::Error) -> bool {
    match &error.kind {
        ErrorKind::NoTag => true,
        ErrorKind::Io(e) => e.kind() == std::io::ErrorKind::UnexpectedEof,
        _ => false,
    }
}

/// Decode every frame of `tag` the mapper can make use of
///
/// Text frames holding several NUL-separated values become multi-valued
/// fields; involved-people lists become (role, name) pairs. Binary frames
/// (pictures, counters, private data) are left out.
pub fn fields_from_tag(tag: &Tag) -> FieldMap {
    let mut fields = FieldMap::new();
    for frame in tag.frames() {
        let id = frame.id();
        let field = match frame.content() {
            Content::Text(text) => Some(MetadataField::multi(id, split_values(text))),
            Content::Link(link) => Some(MetadataField::single(id, link.as_str())),
            Content::Comment(comment) => Some(MetadataField::single(id, comment.text.as_str())),
            Content::ExtendedText(extended) => Some(MetadataField::pairs(
                id,
                [(extended.description.as_str(), extended.value.as_str())],
            )),
            Content::InvolvedPeopleList(list) => Some(MetadataField::pairs(
                id,
                list.items
                    .iter()
                    .map(|item| (item.involvement.as_str(), item.involvee.as_str())),
            )),
            _ => None,
        };
        match field {
            Some(field) if !field.value.is_empty() => fields.insert(field),
            Some(_) => {}
            None => debug!("{}: frame not decoded", id),
        }
    }
    if let Some(date) = v23_recording_date(&fields) {
        fields.replace(MetadataField::single("TYER", date));
    }
    fields
}

/// ID3v2.3 splits the recording date into TYER (`YYYY`) and TDAT (`DDMM`);
/// joined, they make an ISO 8601 date
fn v23_recording_date(fields: &FieldMap) -> Option<String> {
    let year = fields.get("TYER")?.value.texts().into_iter().next()?;
    let day_month = fields.get("TDAT")?.value.texts().into_iter().next()?;
    let all_digits = |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(&year, 4) || !all_digits(&day_month, 4) {
        return None;
    }
    let (day, month) = day_month.split_at(2);
    Some(format!("{}-{}-{}", year, month, day))
}

/// ID3v2.4 separates the values of one text frame with NUL
fn split_values(text: &str) -> Vec<&str> {
    text.split('\0')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .collect()
}
