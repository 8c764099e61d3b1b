//! Tag decoding boundary.
//!
//! Raw tag parsing is done by a [`TagDecoder`]; the result is a [`Decoded`]
//! value whose variant identifies the container family and carries that
//! family's own tag shape (ID3 frame map, Vorbis comment list, FLAC picture
//! list, MP4 atom map). Everything downstream works on these shapes only.

mod lofty_decoder;
mod model;

use std::path::Path;

use crate::error::Result;

pub use lofty_decoder::LoftyDecoder;
pub use model::*;

/// Reads a file and returns its container-shaped tags and stream info.
pub trait TagDecoder {
    fn decode(&self, path: &Path) -> Result<Decoded>;
}

impl<D: TagDecoder + ?Sized> TagDecoder for &D {
    fn decode(&self, path: &Path) -> Result<Decoded> {
        (**self).decode(path)
    }
}
