//! Content identity: an MD5 fingerprint of a file's bytes.
//!
//! The digest is a deduplication key, not a security boundary. It keys both
//! [`AudioRecord`](crate::AudioRecord) equality and the thumbnail store.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use md5::{Digest, Md5};

use crate::error::Result;

/// Chunk size used when no setting overrides it.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Digest the file at `path`, reading `chunk_size` bytes at a time.
///
/// The handle is dropped before returning on every path.
pub fn digest_file(path: &Path, chunk_size: usize) -> Result<String> {
    let mut file = File::open(path)?;
    let hash = digest_reader(&mut file, chunk_size)?;
    tracing::debug!(path = %path.display(), %hash, "computed content digest");
    Ok(hash)
}

/// Fold everything `reader` yields into a lowercase hex MD5 digest.
pub fn digest_reader<R: Read + ?Sized>(reader: &mut R, chunk_size: usize) -> Result<String> {
    let mut hasher = Md5::new();
    let mut buffer = vec![0u8; chunk_size.max(1)];

    loop {
        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
