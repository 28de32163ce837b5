//! EXIF attributes

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use exif::{Field, In, Value};
use mediaont_domain::traits::MetadataReader;
use mediaont_domain::{FieldMap, MetadataField, RawValue};

use crate::error::ReaderError;

/// Character code prefixes of `UserComment`
const ASCII_PREFIX: &[u8; 8] = b"ASCII\0\0\0";
const UNICODE_PREFIX: &[u8; 8] = b"UNICODE\0";

/// Reads the EXIF attributes of an image
///
/// Only the primary image is read; thumbnail attributes such as the
/// thumbnail's own `ImageWidth` would otherwise shadow the real ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifReader;

impl ExifReader {
    /// Create a new reader
    pub fn new() -> Self {
        Self
    }
}

impl MetadataReader for ExifReader {
    type Error = ReaderError;

    fn read(&self, path: &Path) -> Result<Option<FieldMap>, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        let exif = match exif::Reader::new().read_from_container(&mut reader) {
            Ok(exif) => exif,
            Err(exif::Error::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let little_endian = exif.little_endian();
        let fields = exif
            .fields()
            .filter(|field| field.ifd_num == In::PRIMARY)
            .filter_map(|field| field_from_exif(field, little_endian))
            .collect();
        Ok(Some(fields))
    }
}

/// Convert one EXIF field, keyed by its tag name
///
/// Rationals are kept as `n/d` text, integers in decimal, date-times are
/// rewritten to ISO 8601. `UserComment` is decoded according to its
/// character code prefix; anything else undefined stays as bytes.
pub fn field_from_exif(field: &Field, little_endian: bool) -> Option<MetadataField> {
    let key = field.tag.to_string();
    let values: Vec<RawValue> = match &field.value {
        Value::Ascii(strings) => strings.iter().map(|bytes| ascii_value(bytes)).collect(),
        Value::Rational(rationals) => rationals
            .iter()
            .map(|r| RawValue::Text(format!("{}/{}", r.num, r.denom)))
            .collect(),
        Value::SRational(rationals) => rationals
            .iter()
            .map(|r| RawValue::Text(format!("{}/{}", r.num, r.denom)))
            .collect(),
        Value::Byte(values) => texts(values),
        Value::Short(values) => texts(values),
        Value::Long(values) => texts(values),
        Value::SByte(values) => texts(values),
        Value::SShort(values) => texts(values),
        Value::SLong(values) => texts(values),
        Value::Float(values) => texts(values),
        Value::Double(values) => texts(values),
        Value::Undefined(bytes, _) => vec![undefined_value(bytes, little_endian)],
        _ => return None,
    };
    if values.is_empty() {
        return None;
    }
    Some(MetadataField::multi(key, values))
}

fn texts<T: ToString>(values: &[T]) -> Vec<RawValue> {
    values.iter().map(|v| RawValue::Text(v.to_string())).collect()
}

fn ascii_value(bytes: &[u8]) -> RawValue {
    match std::str::from_utf8(bytes) {
        Ok(text) => RawValue::Text(normalize_exif_datetime(text.trim_end_matches('\0').trim())),
        Err(_) => RawValue::Bytes(bytes.to_vec()),
    }
}

fn undefined_value(bytes: &[u8], little_endian: bool) -> RawValue {
    if let Some(text) = bytes.strip_prefix(ASCII_PREFIX) {
        return ascii_value(text);
    }
    if let Some(text) = bytes.strip_prefix(UNICODE_PREFIX) {
        let units: Vec<u16> = text
            .chunks_exact(2)
            .map(|pair| {
                let pair = [pair[0], pair[1]];
                if little_endian {
                    u16::from_le_bytes(pair)
                } else {
                    u16::from_be_bytes(pair)
                }
            })
            .collect();
        if let Ok(text) = String::from_utf16(&units) {
            return RawValue::Text(text.trim_end_matches('\0').trim().to_string());
        }
    }
    RawValue::Bytes(bytes.to_vec())
}

/// Rewrite `YYYY:MM:DD HH:MM:SS` as `YYYY-MM-DDTHH:MM:SS`
///
/// Any other text is returned unchanged.
pub fn normalize_exif_datetime(text: &str) -> String {
    let bytes = text.as_bytes();
    let is_datetime = bytes.len() >= 10
        && bytes[4] == b':'
        && bytes[7] == b':'
        && [0, 1, 2, 3, 5, 6, 8, 9]
            .iter()
            .all(|&i| bytes[i].is_ascii_digit());
    if !is_datetime {
        return text.to_string();
    }

    let date = format!("{}-{}-{}", &text[0..4], &text[5..7], &text[8..10]);
    match text[10..].strip_prefix(' ') {
        Some(time) if !time.is_empty() => format!("{}T{}", date, time),
        _ => date,
    }
}
