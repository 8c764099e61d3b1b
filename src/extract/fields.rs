use std::path::Path;

use crate::decode::{AtomMap, AtomValue, CommentList, Decoded, Fourcc, Id3Frames, StreamInfo};

/// Descriptive and technical fields shared by every family.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackFields {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub year: String,
    /// Seconds.
    pub length: f64,
    pub channels: u32,
    pub sample_rate: u32,
    /// kbps.
    pub bitrate: u32,
}

/// Extract the normalized field set.
///
/// An unsupported container has nothing to read and yields empty fields with
/// zero length; the record builder rejects it before getting here.
pub fn extract_fields(decoded: &Decoded, path: &Path) -> TrackFields {
    match decoded {
        Decoded::Mpeg { info, frames } => mp3_fields(frames.as_ref(), info, path),
        Decoded::Vorbis { info, comments } => ogg_fields(comments, info, path),
        Decoded::Flac { info, comments, .. } => flac_fields(comments, info, path),
        Decoded::Mp4 { info, atoms } => m4a_fields(atoms, info),
        Decoded::Other { .. } => TrackFields::default(),
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Technical fields with the bitrate converted from bps to kbps.
fn technical(info: &StreamInfo) -> TrackFields {
    TrackFields {
        length: info.length.as_secs_f64(),
        channels: info.channels,
        sample_rate: info.sample_rate,
        bitrate: info.bitrate / 1000,
        ..TrackFields::default()
    }
}

fn mp3_fields(frames: Option<&Id3Frames>, info: &StreamInfo, path: &Path) -> TrackFields {
    let text = |key: &str| frames.and_then(|f| f.text(key)).map(str::to_string);

    TrackFields {
        title: text("TIT2").unwrap_or_else(|| file_stem(path)),
        artist: text("TPE1").unwrap_or_default(),
        album: text("TALB").unwrap_or_default(),
        year: text("TDRC").unwrap_or_default(),
        ..technical(info)
    }
}

/// Title from a comment list; only a zero-length value falls back to the stem.
fn comment_title(comments: &CommentList, path: &Path) -> String {
    match comments.lookup("title") {
        "" => file_stem(path),
        title => title.to_string(),
    }
}

fn ogg_fields(comments: &CommentList, info: &StreamInfo, path: &Path) -> TrackFields {
    TrackFields {
        title: comment_title(comments, path),
        artist: comments.lookup("artist").to_string(),
        album: comments.lookup("album").to_string(),
        year: comments.lookup("year").to_string(),
        ..technical(info)
    }
}

fn flac_fields(comments: &CommentList, info: &StreamInfo, path: &Path) -> TrackFields {
    let album = match comments.lookup("album") {
        "" => comments.lookup("albumtitle"),
        album => album,
    };

    TrackFields {
        title: comment_title(comments, path),
        artist: comments.lookup("artist").to_string(),
        album: album.to_string(),
        year: comments.lookup("year").to_string(),
        // Lossless: not reported.
        bitrate: 0,
        ..technical(info)
    }
}

fn first_text(atoms: &AtomMap, code: Fourcc) -> String {
    match atoms.values(code).first() {
        Some(AtomValue::Text(text)) => text.clone(),
        _ => String::new(),
    }
}

fn m4a_fields(atoms: &AtomMap, info: &StreamInfo) -> TrackFields {
    TrackFields {
        title: first_text(atoms, Fourcc::NAME),
        artist: first_text(atoms, Fourcc::ARTIST),
        album: first_text(atoms, Fourcc::ALBUM),
        year: first_text(atoms, Fourcc::DAY),
        ..technical(info)
    }
}
