use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::decode::{AtomValue, Decoded, Fourcc, PictureKind};

/// Locate the family's cover image and return it base64-encoded.
///
/// Ogg files already carry the picture as base64 (`metadata_block_picture`),
/// so that value is passed through untouched.
pub fn extract_artwork(decoded: &Decoded) -> Option<String> {
    match decoded {
        Decoded::Mpeg { frames, .. } => frames
            .as_ref()
            .and_then(|f| f.picture("APIC:"))
            .map(|data| STANDARD.encode(data)),
        Decoded::Vorbis { comments, .. } => comments
            .find("metadata_block_picture")
            .filter(|v| !v.is_empty())
            .map(str::to_string),
        Decoded::Flac { pictures, .. } => pictures
            .iter()
            .find(|p| p.kind == PictureKind::CoverFront)
            .map(|p| STANDARD.encode(&p.data)),
        Decoded::Mp4 { atoms, .. } => match atoms.values(Fourcc::COVER).first() {
            Some(AtomValue::Data(data)) => Some(STANDARD.encode(data)),
            _ => None,
        },
        Decoded::Other { .. } => None,
    }
}
