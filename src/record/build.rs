use std::path::Path;

use crate::classify::classify;
use crate::config::Settings;
use crate::decode::{Decoded, LoftyDecoder, TagDecoder};
use crate::error::{Error, Result};
use crate::extract::{extract_artwork, extract_fields};
use crate::identity::{self, DEFAULT_CHUNK_SIZE};
use crate::thumbnail::{NoopThumbnailStore, ThumbnailStore};

use super::model::AudioRecord;

/// Assembles [`AudioRecord`]s from files.
///
/// Holds no per-file state, so one builder can serve any number of files,
/// from several threads if the decoder and store allow it.
#[derive(Debug, Clone)]
pub struct RecordBuilder<D = LoftyDecoder, S = NoopThumbnailStore> {
    decoder: D,
    store: S,
    chunk_size: usize,
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            decoder: LoftyDecoder::default(),
            store: NoopThumbnailStore,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            decoder: LoftyDecoder::from_settings(&settings.decode),
            store: NoopThumbnailStore,
            chunk_size: settings.identity.chunk_size,
        }
    }
}

impl<D, S> RecordBuilder<D, S>
where
    D: TagDecoder,
    S: ThumbnailStore,
{
    pub fn with_decoder<D2: TagDecoder>(self, decoder: D2) -> RecordBuilder<D2, S> {
        RecordBuilder {
            decoder,
            store: self.store,
            chunk_size: self.chunk_size,
        }
    }

    pub fn with_thumbnail_store<S2: ThumbnailStore>(self, store: S2) -> RecordBuilder<D, S2> {
        RecordBuilder {
            decoder: self.decoder,
            store,
            chunk_size: self.chunk_size,
        }
    }

    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    pub fn thumbnail_store(&self) -> &S {
        &self.store
    }

    /// Build a record for `path`.
    ///
    /// Either every field is populated or an error is returned; there is no
    /// partial record. The thumbnail store is told about the artwork (or its
    /// absence) before the length check, so it also sees zero-length files.
    pub fn build(&self, path: impl AsRef<Path>) -> Result<AudioRecord> {
        let path = path.as_ref();

        let hash = identity::digest_file(path, self.chunk_size)?;
        let decoded = self.decoder.decode(path)?;

        let Some(kind) = classify(&decoded) else {
            let file_type = match &decoded {
                Decoded::Other { file_type } => file_type.clone(),
                _ => "unknown".to_string(),
            };
            tracing::debug!(path = %path.display(), %file_type, "unsupported container");
            return Err(Error::UnsupportedFormat(file_type));
        };

        let fields = extract_fields(&decoded, path);
        let artwork = extract_artwork(&decoded);
        self.store.store_thumbnail(&hash, artwork.as_deref());

        // NaN fails this too.
        if !(fields.length > 0.0) {
            tracing::debug!(path = %path.display(), %hash, "zero-length media");
            return Err(Error::EmptyMedia(path.to_path_buf()));
        }

        tracing::debug!(
            path = %path.display(),
            %hash,
            format = kind.label(),
            has_artwork = artwork.is_some(),
            "built audio record"
        );

        Ok(AudioRecord::new(path.to_path_buf(), hash, kind, fields))
    }
}

impl AudioRecord {
    /// Build a record with default settings, the lofty decoder and no thumbnail store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        RecordBuilder::new().build(path)
    }
}
