use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop an [`AudioRecord`](crate::AudioRecord) from being built.
#[derive(Error, Debug)]
pub enum Error {
    /// The file could not be opened or read while computing its digest.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The decoder recognised the container but failed to parse it.
    #[error("failed to decode tags: {0}")]
    Decode(#[from] lofty::error::LoftyError),

    /// The container is not one of MP3, Ogg Vorbis, FLAC or MP4.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoding succeeded but the media reports no duration.
    #[error("empty media (zero length): {}", .0.display())]
    EmptyMedia(PathBuf),
}

impl Error {
    /// True for the failures that mean "this file cannot become a record",
    /// as opposed to the file being unreadable.
    pub fn is_construction_failure(&self) -> bool {
        matches!(self, Error::UnsupportedFormat(_) | Error::EmptyMedia(_))
    }
}
