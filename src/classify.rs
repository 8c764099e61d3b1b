use serde::{Deserialize, Serialize};

use crate::decode::Decoded;

/// The four container families a record can be built from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    Mp3,
    Ogg,
    Flac,
    M4a,
}

impl AudioFormat {
    /// Canonical extension, independent of the file's actual name.
    pub fn ext(self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Ogg => "ogg",
            AudioFormat::Flac => "flac",
            AudioFormat::M4a => "m4a",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "MP3",
            AudioFormat::Ogg => "OGG",
            AudioFormat::Flac => "FLAC",
            AudioFormat::M4a => "M4A",
        }
    }
}

/// Map a decoded file to its family. `None` means unsupported.
pub fn classify(decoded: &Decoded) -> Option<AudioFormat> {
    match decoded {
        Decoded::Mpeg { .. } => Some(AudioFormat::Mp3),
        Decoded::Vorbis { .. } => Some(AudioFormat::Ogg),
        Decoded::Flac { .. } => Some(AudioFormat::Flac),
        Decoded::Mp4 { .. } => Some(AudioFormat::M4a),
        Decoded::Other { .. } => None,
    }
}
