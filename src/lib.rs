//! Normalized metadata records for local audio files.
//!
//! MP3 (ID3), Ogg Vorbis, FLAC and MP4/M4A files expose their tags in four
//! incompatible shapes. This crate decodes a file with `lofty`, classifies
//! the container, applies that family's lookup and fallback rules and returns
//! one uniform [`AudioRecord`] keyed by an MD5 digest of the file contents.
//! Embedded cover art is handed to a [`ThumbnailStore`].
//!
//! ```rust,no_run
//! use audiorecord::{MemoryThumbnailStore, RecordBuilder, Settings};
//!
//! # fn main() -> audiorecord::Result<()> {
//! let store = MemoryThumbnailStore::new();
//! let builder = RecordBuilder::from_settings(&Settings::load_or_default())
//!     .with_thumbnail_store(&store);
//!
//! let record = builder.build("/music/song.flac")?;
//! println!("{record}");
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod config;
pub mod decode;
mod error;
pub mod extract;
pub mod identity;
pub mod record;
pub mod thumbnail;

#[cfg(test)]
mod fixtures;

pub use classify::{AudioFormat, classify};
pub use config::Settings;
pub use decode::{Decoded, LoftyDecoder, TagDecoder};
pub use error::{Error, Result};
pub use record::{AudioRecord, Genre, RecordBuilder, render};
pub use thumbnail::{MemoryThumbnailStore, NoopThumbnailStore, ThumbnailStore};
