//! Reader error types

use thiserror::Error;

/// Errors that can occur while reading a metadata container
#[derive(Error, Debug)]
pub enum ReaderError {
    /// File could not be opened or read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// ID3 tag is present but malformed
    #[error("ID3 error: {0}")]
    Id3(#[from] id3::Error),

    /// EXIF data is present but malformed
    #[error("EXIF error: {0}")]
    Exif(#[from] exif::Error),

    /// No reader handles this kind of file
    #[error("Unsupported file type: {0}")]
    Unsupported(String),
}
