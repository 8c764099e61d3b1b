use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Technical stream properties as reported by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StreamInfo {
    pub length: Duration,
    pub channels: u32,
    pub sample_rate: u32,
    /// Bits per second.
    pub bitrate: u32,
}

/// One decoded file, shaped after its container family.
#[derive(Debug, Clone)]
pub enum Decoded {
    /// MPEG audio. `frames` is `None` when the file carries no ID3 tag at all.
    Mpeg {
        info: StreamInfo,
        frames: Option<Id3Frames>,
    },
    /// Ogg Vorbis.
    Vorbis {
        info: StreamInfo,
        comments: CommentList,
    },
    /// FLAC: Vorbis comments plus picture blocks.
    Flac {
        info: StreamInfo,
        comments: CommentList,
        pictures: Vec<FlacPicture>,
    },
    /// MP4/M4A `ilst` atoms.
    Mp4 { info: StreamInfo, atoms: AtomMap },
    /// Anything else the decoder could identify (or not).
    Other { file_type: String },
}

impl Decoded {
    pub fn info(&self) -> Option<&StreamInfo> {
        match self {
            Decoded::Mpeg { info, .. }
            | Decoded::Vorbis { info, .. }
            | Decoded::Flac { info, .. }
            | Decoded::Mp4 { info, .. } => Some(info),
            Decoded::Other { .. } => None,
        }
    }
}

/// ID3v2 frame content relevant to records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Id3Frame {
    Text(Vec<String>),
    Picture(Vec<u8>),
}

/// ID3v2 frames keyed by frame id (`TIT2`, `TALB`, ...).
///
/// Attached pictures are keyed `APIC:<description>`, so the picture without a
/// description lives under `APIC:`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Id3Frames(BTreeMap<String, Id3Frame>);

impl Id3Frames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, frame: Id3Frame) {
        self.0.insert(key.into(), frame);
    }

    pub fn get(&self, key: &str) -> Option<&Id3Frame> {
        self.0.get(key)
    }

    /// First text value of a text frame.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            Id3Frame::Text(values) => values.first().map(String::as_str),
            Id3Frame::Picture(_) => None,
        }
    }

    pub fn picture(&self, key: &str) -> Option<&[u8]> {
        match self.get(key)? {
            Id3Frame::Picture(data) => Some(data),
            Id3Frame::Text(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Free-form Vorbis comments in file order. Keys keep their original case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentList(Vec<(String, String)>);

impl CommentList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// First value whose key matches case-insensitively, or `""`.
    pub fn lookup(&self, key: &str) -> &str {
        self.find(key).unwrap_or("")
    }

    /// Like [`lookup`](Self::lookup) but tells a missing key apart from an empty value.
    pub fn find(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CommentList {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Picture block type as declared in FLAC/ID3 (the APIC type table).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PictureKind {
    CoverFront,
    CoverBack,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlacPicture {
    pub kind: PictureKind,
    pub data: Vec<u8>,
}

/// A four-character MP4 atom code. Codes may contain non-ASCII bytes (`©` is `0xA9`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fourcc(pub [u8; 4]);

impl Fourcc {
    pub const NAME: Fourcc = Fourcc(*b"\xa9nam");
    pub const ARTIST: Fourcc = Fourcc(*b"\xa9ART");
    pub const ALBUM: Fourcc = Fourcc(*b"\xa9alb");
    pub const DAY: Fourcc = Fourcc(*b"\xa9day");
    pub const COVER: Fourcc = Fourcc(*b"covr");
}

impl fmt::Display for Fourcc {
    // Latin-1, so 0xA9 prints as '©'.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|&b| write!(f, "{}", b as char))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtomValue {
    Text(String),
    Data(Vec<u8>),
}

/// MP4 `ilst` atoms, each holding an ordered value list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtomMap(BTreeMap<Fourcc, Vec<AtomValue>>);

impl AtomMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, code: Fourcc, value: AtomValue) {
        self.0.entry(code).or_default().push(value);
    }

    /// Values under `code`; a missing atom reads as an empty list.
    pub fn values(&self, code: Fourcc) -> &[AtomValue] {
        self.0.get(&code).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
