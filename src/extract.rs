//! Per-family mapping from decoded tags to record fields and cover art.
//!
//! Each container family has its own lookup keys and fallback rules. They are
//! deliberately not unified: MP4 titles never fall back to the file name, and
//! only FLAC retries the album under `albumtitle`.

mod artwork;
mod fields;

pub use artwork::extract_artwork;
pub use fields::{TrackFields, extract_fields};
