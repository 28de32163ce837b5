//! Field module - decoded metadata as handed over by container readers

use std::borrow::Cow;
use std::collections::BTreeMap;

/// A single raw value of a metadata field
///
/// Readers pass text through as [`RawValue::Text`]. Values whose encoding
/// the reader could not settle (EXIF ASCII or UNDEFINED payloads) stay as
/// bytes; turning them into text is the value factory's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// Decoded text
    Text(String),

    /// Undecoded bytes
    Bytes(Vec<u8>),
}

impl RawValue {
    /// Get the value as UTF-8 text, or `None` if the bytes are not UTF-8
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            RawValue::Text(text) => Some(Cow::Borrowed(text.as_str())),
            RawValue::Bytes(bytes) => std::str::from_utf8(bytes).ok().map(Cow::Borrowed),
        }
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        RawValue::Text(text.to_string())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        RawValue::Text(text)
    }
}

impl From<Vec<u8>> for RawValue {
    fn from(bytes: Vec<u8>) -> Self {
        RawValue::Bytes(bytes)
    }
}

/// The value(s) carried by a metadata field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Exactly one value
    Single(RawValue),

    /// An ordered sequence of values
    Multi(Vec<RawValue>),

    /// An ordered sequence of (role label, value) pairs
    Pairs(Vec<(String, RawValue)>),
}

impl FieldValue {
    /// Number of values carried
    pub fn len(&self) -> usize {
        match self {
            FieldValue::Single(_) => 1,
            FieldValue::Multi(values) => values.len(),
            FieldValue::Pairs(pairs) => pairs.len(),
        }
    }

    /// Whether the field carries no value at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every value with its role label (only paired fields have one)
    pub fn entries(&self) -> Vec<(Option<&str>, &RawValue)> {
        match self {
            FieldValue::Single(value) => vec![(None, value)],
            FieldValue::Multi(values) => values.iter().map(|v| (None, v)).collect(),
            FieldValue::Pairs(pairs) => pairs
                .iter()
                .map(|(label, value)| (Some(label.as_str()), value))
                .collect(),
        }
    }

    /// Every value decoded as text; undecodable values are left out
    pub fn texts(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter_map(|(_, value)| value.as_text().map(Cow::into_owned))
            .collect()
    }
}

/// A decoded metadata field: a tag key and its value(s)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataField {
    /// Tag identifier (ID3 frame id, EXIF tag name)
    pub key: String,

    /// Value(s) carried by the field
    pub value: FieldValue,
}

impl MetadataField {
    /// Create a single-valued field
    pub fn single(key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        Self {
            key: key.into(),
            value: FieldValue::Single(value.into()),
        }
    }

    /// Create a multi-valued field
    pub fn multi<V: Into<RawValue>>(
        key: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Self {
            key: key.into(),
            value: FieldValue::Multi(values.into_iter().map(Into::into).collect()),
        }
    }

    /// Create a paired-list field
    pub fn pairs<L: Into<String>, V: Into<RawValue>>(
        key: impl Into<String>,
        pairs: impl IntoIterator<Item = (L, V)>,
    ) -> Self {
        Self {
            key: key.into(),
            value: FieldValue::Pairs(
                pairs
                    .into_iter()
                    .map(|(label, value)| (label.into(), value.into()))
                    .collect(),
            ),
        }
    }
}

/// The fields read from one file, keyed by tag identifier
///
/// Inserting a field under an existing key merges the values into a
/// multi-valued (or paired) field, since containers may repeat frames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    fields: BTreeMap<String, MetadataField>,
}

impl FieldMap {
    /// Create an empty field map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, merging with an existing one under the same key
    pub fn insert(&mut self, field: MetadataField) {
        match self.fields.remove(&field.key) {
            None => {
                self.fields.insert(field.key.clone(), field);
            }
            Some(existing) => {
                let merged = merge_values(existing.value, field.value);
                self.fields.insert(
                    field.key.clone(),
                    MetadataField {
                        key: field.key,
                        value: merged,
                    },
                );
            }
        }
    }

    /// Add a field, dropping any existing one under the same key
    pub fn replace(&mut self, field: MetadataField) {
        self.fields.insert(field.key.clone(), field);
    }

    /// Get a field by key
    pub fn get(&self, key: &str) -> Option<&MetadataField> {
        self.fields.get(key)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field was read
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in key order
    pub fn iter(&self) -> impl Iterator<Item = &MetadataField> {
        self.fields.values()
    }
}

impl FromIterator<MetadataField> for FieldMap {
    fn from_iter<I: IntoIterator<Item = MetadataField>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for field in iter {
            map.insert(field);
        }
        map
    }
}

fn merge_values(existing: FieldValue, added: FieldValue) -> FieldValue {
    match (existing, added) {
        (FieldValue::Pairs(mut a), FieldValue::Pairs(b)) => {
            a.extend(b);
            FieldValue::Pairs(a)
        }
        (existing, added) => {
            let mut values = into_values(existing);
            values.extend(into_values(added));
            FieldValue::Multi(values)
        }
    }
}

fn into_values(value: FieldValue) -> Vec<RawValue> {
    match value {
        FieldValue::Single(value) => vec![value],
        FieldValue::Multi(values) => values,
        FieldValue::Pairs(pairs) => pairs.into_iter().map(|(_, value)| value).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_value_decoding() {
        assert_eq!(RawValue::from("abc").as_text().as_deref(), Some("abc"));
        assert_eq!(
            RawValue::from(b"caf\xc3\xa9".to_vec()).as_text().as_deref(),
            Some("café")
        );
        assert!(RawValue::from(vec![0xff, 0xfe, 0x00]).as_text().is_none());
    }

    #[test]
    fn test_entries_carry_pair_labels() {
        let field = MetadataField::pairs("TIPL", [("producer", "Alice"), ("engineer", "Bob")]);
        let entries = field.value.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, Some("producer"));
        assert_eq!(entries[1].1, &RawValue::from("Bob"));
    }

    #[test]
    fn test_insert_merges_repeated_keys() {
        let mut map = FieldMap::new();
        map.insert(MetadataField::single("TPE1", "Alice"));
        map.insert(MetadataField::single("TPE1", "Bob"));

        let field = map.get("TPE1").unwrap();
        assert_eq!(field.value.texts(), vec!["Alice".to_string(), "Bob".to_string()]);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_replace_drops_earlier_values() {
        let mut map = FieldMap::new();
        map.insert(MetadataField::multi("TYER", ["2004", "2005"]));
        map.replace(MetadataField::single("TYER", "2004-05-06"));

        assert_eq!(map.get("TYER").unwrap().value.texts(), vec!["2004-05-06".to_string()]);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_texts_skip_undecodable_values() {
        let field = MetadataField::multi("K", [RawValue::from("ok"), RawValue::from(vec![0xff])]);
        assert_eq!(field.value.texts(), vec!["ok".to_string()]);
    }
}
