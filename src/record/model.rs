use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::classify::AudioFormat;
use crate::extract::TrackFields;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    #[default]
    Unknown,
}

impl Genre {
    pub fn label(self) -> &'static str {
        match self {
            Genre::Unknown => "Unknown",
        }
    }
}

/// Normalized metadata for one audio file.
///
/// Identity and technical fields are fixed at construction; only the playback
/// state (`listened`, `position`) changes afterwards. Two records are equal
/// when their content digests are equal, wherever the files live.
///
/// Deserializing enforces the same invariants as building: a non-positive
/// `length` is rejected and an invalid `position` is stored as 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioRecord {
    filepath: PathBuf,
    hash: String,
    title: String,
    artist: String,
    album: String,
    year: String,
    #[serde(deserialize_with = "positive_length")]
    length: f64,
    channels: u32,
    sample_rate: u32,
    bitrate: u32,
    #[serde(rename = "type")]
    kind: AudioFormat,
    genre: Genre,
    listened: bool,
    #[serde(deserialize_with = "playback_position")]
    position: f64,
}

impl AudioRecord {
    /// Only the builder creates records, after validation.
    pub(super) fn new(filepath: PathBuf, hash: String, kind: AudioFormat, fields: TrackFields) -> Self {
        let TrackFields {
            title,
            artist,
            album,
            year,
            length,
            channels,
            sample_rate,
            bitrate,
        } = fields;

        Self {
            filepath,
            hash,
            title,
            artist,
            album,
            year,
            length,
            channels,
            sample_rate,
            bitrate,
            kind,
            genre: Genre::Unknown,
            listened: false,
            position: 0.0,
        }
    }

    pub fn filepath(&self) -> &Path {
        &self.filepath
    }

    /// Lowercase hex MD5 of the file contents.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn album(&self) -> &str {
        &self.album
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    /// Duration in seconds; always > 0.
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn channels(&self) -> u32 {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// kbps; 0 for FLAC.
    pub fn bitrate(&self) -> u32 {
        self.bitrate
    }

    pub fn kind(&self) -> AudioFormat {
        self.kind
    }

    pub fn ext(&self) -> &'static str {
        self.kind.ext()
    }

    pub fn genre(&self) -> Genre {
        self.genre
    }

    pub fn listened(&self) -> bool {
        self.listened
    }

    pub fn mark_listened(&mut self) {
        self.listened = true;
    }

    pub fn set_listened(&mut self, listened: bool) {
        self.listened = listened;
    }

    /// Resume position in seconds.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Negative and non-finite positions are stored as 0.
    pub fn set_position(&mut self, seconds: f64) {
        self.position = clamp_position(seconds);
    }
}

fn clamp_position(seconds: f64) -> f64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    }
}

fn positive_length<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let length = f64::deserialize(deserializer)?;
    if length > 0.0 {
        Ok(length)
    } else {
        Err(serde::de::Error::custom(format!(
            "length must be positive, got {length}"
        )))
    }
}

fn playback_position<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(clamp_position)
}

impl PartialEq for AudioRecord {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for AudioRecord {}

impl Hash for AudioRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}
