//! mediaont Reader
//!
//! Container parsing for the mapper: ID3v2 tags through the `id3` crate and
//! EXIF through `kamadak-exif`. Both readers hand over a
//! [`FieldMap`](mediaont_domain::FieldMap) keyed by frame id or tag name and
//! return `Ok(None)` when a file carries no container at all.

#![warn(missing_docs)]

mod error;
mod exif_data;
mod id3_tag;
mod source;

pub use crate::error::ReaderError;
pub use crate::exif_data::{field_from_exif, normalize_exif_datetime, ExifReader};
pub use crate::id3_tag::{fields_from_tag, Id3Reader};
pub use crate::source::{AnyReader, SourceKind};
