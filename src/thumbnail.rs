//! Thumbnail hand-off.
//!
//! Records don't store cover art themselves. Every successful extraction
//! reports `(digest, artwork)` to a [`ThumbnailStore`], including when there
//! is no artwork, so the store can drop a stale image for that digest.

use std::collections::HashMap;
use std::sync::Mutex;

/// Sink for extracted cover art, keyed by content digest.
pub trait ThumbnailStore {
    /// Must accept `None` without failing.
    fn store_thumbnail(&self, key: &str, image_base64: Option<&str>);
}

impl<S: ThumbnailStore + ?Sized> ThumbnailStore for &S {
    fn store_thumbnail(&self, key: &str, image_base64: Option<&str>) {
        (**self).store_thumbnail(key, image_base64)
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopThumbnailStore;

impl ThumbnailStore for NoopThumbnailStore {
    fn store_thumbnail(&self, key: &str, image_base64: Option<&str>) {
        tracing::trace!(key, has_image = image_base64.is_some(), "thumbnail discarded");
    }
}

/// Keeps the latest artwork per digest in memory. `None` clears the entry.
#[derive(Debug, Default)]
pub struct MemoryThumbnailStore {
    images: Mutex<HashMap<String, String>>,
}

impl MemoryThumbnailStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.images
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ThumbnailStore for MemoryThumbnailStore {
    fn store_thumbnail(&self, key: &str, image_base64: Option<&str>) {
        let mut images = self.lock();
        match image_base64 {
            Some(image) => {
                tracing::debug!(key, bytes = image.len(), "storing thumbnail");
                images.insert(key.to_string(), image.to_string());
            }
            None => {
                if images.remove(key).is_some() {
                    tracing::debug!(key, "cleared thumbnail");
                }
            }
        }
    }
}
