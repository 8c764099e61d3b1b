use std::io::{Read, Seek};
use std::path::Path;

use lofty::config::{ParseOptions, ParsingMode};
use lofty::file::{AudioFile, FileType};
use lofty::flac::FlacFile;
use lofty::mp4::{AtomData, AtomIdent, Ilst, Mp4File};
use lofty::mpeg::MpegFile;
use lofty::ogg::{OggPictureStorage, VorbisComments, VorbisFile};
use lofty::picture::{Picture, PictureInformation, PictureType};
use lofty::probe::Probe;
use lofty::properties::FileProperties;
use lofty::tag::{ItemKey, Tag};

use crate::config::DecodeSettings;
use crate::error::Result;

use super::model::{
    AtomMap, AtomValue, CommentList, Decoded, FlacPicture, Fourcc, Id3Frame, Id3Frames,
    PictureKind, StreamInfo,
};
use super::TagDecoder;

const ID3_TEXT_FRAMES: [&str; 4] = ["TIT2", "TPE1", "TALB", "TDRC"];

const MP4_TEXT_ATOMS: [Fourcc; 4] = [Fourcc::NAME, Fourcc::ARTIST, Fourcc::ALBUM, Fourcc::DAY];

/// [`TagDecoder`] backed by `lofty`.
#[derive(Debug, Clone, Copy)]
pub struct LoftyDecoder {
    parsing_mode: ParsingMode,
    read_cover_art: bool,
}

impl Default for LoftyDecoder {
    fn default() -> Self {
        Self::from_settings(&DecodeSettings::default())
    }
}

impl LoftyDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(settings: &DecodeSettings) -> Self {
        Self {
            parsing_mode: settings.parsing_mode.into(),
            read_cover_art: settings.read_cover_art,
        }
    }

    fn parse_options(&self) -> ParseOptions {
        ParseOptions::new().parsing_mode(self.parsing_mode)
    }
}

impl TagDecoder for LoftyDecoder {
    fn decode(&self, path: &Path) -> Result<Decoded> {
        let probe = Probe::open(path)?.guess_file_type()?;

        let Some(file_type) = probe.file_type() else {
            tracing::debug!(path = %path.display(), "decoder could not identify container");
            return Ok(Decoded::Other {
                file_type: "unknown".to_string(),
            });
        };

        tracing::trace!(path = %path.display(), ?file_type, "decoding container");

        let mut reader = probe.into_inner();
        reader.rewind()?;
        let options = self.parse_options();

        let decoded = match file_type {
            FileType::Mpeg => decode_mpeg(&mut reader, options, self.read_cover_art)?,
            FileType::Vorbis => decode_vorbis(&mut reader, options, self.read_cover_art)?,
            FileType::Flac => decode_flac(&mut reader, options, self.read_cover_art)?,
            FileType::Mp4 => decode_mp4(&mut reader, options, self.read_cover_art)?,
            other => Decoded::Other {
                file_type: format!("{other:?}"),
            },
        };

        Ok(decoded)
    }
}

fn stream_info(props: FileProperties) -> StreamInfo {
    StreamInfo {
        length: props.duration(),
        channels: props.channels().map(u32::from).unwrap_or(0),
        sample_rate: props.sample_rate().unwrap_or(0),
        // lofty reports kbps.
        bitrate: props
            .audio_bitrate()
            .or_else(|| props.overall_bitrate())
            .unwrap_or(0)
            .saturating_mul(1000),
    }
}

fn decode_mpeg<R: Read + Seek>(
    reader: &mut R,
    options: ParseOptions,
    read_cover_art: bool,
) -> Result<Decoded> {
    let file = MpegFile::read_from(reader, options)?;
    let info = stream_info(file.properties().clone().into());

    // ID3v1 only counts when there is no ID3v2 block.
    let tag = match (file.id3v2(), file.id3v1()) {
        (Some(id3v2), _) => Some(Tag::from(id3v2.clone())),
        (None, Some(id3v1)) => {
            tracing::trace!("no ID3v2 block, reading ID3v1");
            Some(Tag::from(id3v1.clone()))
        }
        (None, None) => None,
    };
    let frames = tag.map(|tag| id3_frames(&tag, read_cover_art));
    Ok(Decoded::Mpeg { info, frames })
}

fn id3_frames(tag: &Tag, read_cover_art: bool) -> Id3Frames {
    let mut frames = Id3Frames::new();

    for frame_id in ID3_TEXT_FRAMES {
        let values: Vec<String> = id3_item_keys(frame_id)
            .into_iter()
            .map(|key| tag.get_strings(key).map(str::to_string).collect::<Vec<_>>())
            .find(|values| !values.is_empty())
            .unwrap_or_default();
        if !values.is_empty() {
            frames.insert(frame_id, Id3Frame::Text(values));
        }
    }

    if read_cover_art {
        for picture in tag.pictures() {
            let key = format!("APIC:{}", picture.description().unwrap_or(""));
            frames.insert(key, Id3Frame::Picture(picture.data().to_vec()));
        }
    }

    frames
}

/// Generic keys lofty files an ID3 frame under.
/// `TYER` (ID3v2.3) and the ID3v1 year surface as `Year` and are promoted to `TDRC`.
fn id3_item_keys(frame_id: &str) -> Vec<ItemKey> {
    match frame_id {
        "TIT2" => vec![ItemKey::TrackTitle],
        "TPE1" => vec![ItemKey::TrackArtist],
        "TALB" => vec![ItemKey::AlbumTitle],
        "TDRC" => vec![ItemKey::RecordingDate, ItemKey::Year],
        _ => Vec::new(),
    }
}

fn decode_vorbis<R: Read + Seek>(
    reader: &mut R,
    options: ParseOptions,
    read_cover_art: bool,
) -> Result<Decoded> {
    let file = VorbisFile::read_from(reader, options)?;
    let info = stream_info(file.properties().clone().into());
    let tag = file.vorbis_comments();

    let mut comments = comment_list(tag);
    if read_cover_art {
        // lofty lifts METADATA_BLOCK_PICTURE out of the comment list; put it back.
        for (picture, picture_info) in tag.pictures() {
            if is_converted_coverart(picture, picture_info) {
                tracing::trace!("skipping picture converted from legacy COVERART");
                continue;
            }
            let encoded = picture.as_flac_bytes(*picture_info, true);
            comments.push(
                "METADATA_BLOCK_PICTURE",
                String::from_utf8_lossy(&encoded).into_owned(),
            );
        }
    }

    Ok(Decoded::Vorbis { info, comments })
}

/// lofty also turns the legacy `COVERART` field into a picture. Those carry
/// no type, description or dimensions; only `metadata_block_picture` counts
/// as artwork, so they are dropped.
fn is_converted_coverart(picture: &Picture, info: &PictureInformation) -> bool {
    picture.pic_type() == PictureType::Other
        && picture.description().is_none()
        && *info == PictureInformation::default()
}

fn decode_flac<R: Read + Seek>(
    reader: &mut R,
    options: ParseOptions,
    read_cover_art: bool,
) -> Result<Decoded> {
    let file = FlacFile::read_from(reader, options)?;
    let info = stream_info(file.properties().clone().into());
    let comments = file.vorbis_comments().map(comment_list).unwrap_or_default();

    let pictures = if read_cover_art {
        file.pictures()
            .iter()
            .map(|(picture, _)| FlacPicture {
                kind: picture_kind(picture.pic_type()),
                data: picture.data().to_vec(),
            })
            .collect()
    } else {
        Vec::new()
    };

    Ok(Decoded::Flac {
        info,
        comments,
        pictures,
    })
}

fn comment_list(tag: &VorbisComments) -> CommentList {
    tag.items().collect()
}

fn picture_kind(pic_type: PictureType) -> PictureKind {
    match pic_type {
        PictureType::CoverFront => PictureKind::CoverFront,
        PictureType::CoverBack => PictureKind::CoverBack,
        _ => PictureKind::Other,
    }
}

fn decode_mp4<R: Read + Seek>(
    reader: &mut R,
    options: ParseOptions,
    read_cover_art: bool,
) -> Result<Decoded> {
    let file = Mp4File::read_from(reader, options)?;
    let info = stream_info(file.properties().clone().into());
    let atoms = file
        .ilst()
        .map(|ilst| atom_map(ilst, read_cover_art))
        .unwrap_or_default();
    Ok(Decoded::Mp4 { info, atoms })
}

fn atom_map(ilst: &Ilst, read_cover_art: bool) -> AtomMap {
    let mut atoms = AtomMap::new();

    for code in MP4_TEXT_ATOMS {
        if let Some(atom) = ilst.get(&AtomIdent::Fourcc(code.0)) {
            for data in atom.data() {
                if let AtomData::UTF8(text) = data {
                    atoms.push(code, AtomValue::Text(text.clone()));
                }
            }
        }
    }

    if read_cover_art {
        if let Some(atom) = ilst.get(&AtomIdent::Fourcc(Fourcc::COVER.0)) {
            for data in atom.data() {
                if let AtomData::Picture(picture) = data {
                    atoms.push(Fourcc::COVER, AtomValue::Data(picture.data().to_vec()));
                }
            }
        }
    }

    atoms
}
