//! Test-only builders for tiny on-disk audio files and decoded values.

use std::path::{Path, PathBuf};
use std::time::Duration;

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::decode::StreamInfo;

/// Fake image payload. Only the bytes matter, nobody decodes them.
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nnot-really-a-png";

pub fn stream_info(secs: f64) -> StreamInfo {
    StreamInfo {
        length: Duration::from_secs_f64(secs),
        channels: 2,
        sample_rate: 44_100,
        bitrate: 320_000,
    }
}

/// A FLAC picture block type (APIC table): 3 is front cover, 4 is back cover.
pub struct Picture<'a> {
    pub kind: u32,
    pub data: &'a [u8],
}

/// FLAC `METADATA_BLOCK_PICTURE` body for a 1x1 24-bit PNG without description.
fn picture_block(picture: &Picture<'_>) -> Vec<u8> {
    let mime = b"image/png";
    let mut block = Vec::new();
    block.extend_from_slice(&picture.kind.to_be_bytes());
    block.extend_from_slice(&(mime.len() as u32).to_be_bytes());
    block.extend_from_slice(mime);
    block.extend_from_slice(&0u32.to_be_bytes());
    for dim in [1u32, 1, 24, 0] {
        block.extend_from_slice(&dim.to_be_bytes());
    }
    block.extend_from_slice(&(picture.data.len() as u32).to_be_bytes());
    block.extend_from_slice(picture.data);
    block
}

/// The value an Ogg `METADATA_BLOCK_PICTURE` comment carries for `picture`.
pub fn block_picture_base64(picture: &Picture<'_>) -> String {
    STANDARD.encode(picture_block(picture))
}

/// Vorbis comment body (vendor, count, `KEY=value` entries), no framing bit.
fn vorbis_comment_block(comments: &[(&str, &str)]) -> Vec<u8> {
    let vendor = b"audiorecord tests";
    let mut block = Vec::new();
    block.extend_from_slice(&(vendor.len() as u32).to_le_bytes());
    block.extend_from_slice(vendor);
    block.extend_from_slice(&(comments.len() as u32).to_le_bytes());
    for (key, value) in comments {
        let entry = format!("{key}={value}");
        block.extend_from_slice(&(entry.len() as u32).to_le_bytes());
        block.extend_from_slice(entry.as_bytes());
    }
    block
}

/// Build a metadata-only FLAC stream: STREAMINFO, optional Vorbis comments
/// and picture blocks, no audio frames.
pub fn flac_bytes(
    sample_rate: u32,
    channels: u32,
    total_samples: u64,
    comments: &[(&str, &str)],
    pictures: &[Picture<'_>],
) -> Vec<u8> {
    let mut blocks: Vec<(u8, Vec<u8>)> = Vec::new();

    let mut info = Vec::with_capacity(34);
    info.extend_from_slice(&4096u16.to_be_bytes());
    info.extend_from_slice(&4096u16.to_be_bytes());
    info.extend_from_slice(&[0, 0, 0, 0, 0, 0]);
    let packed: u64 = (u64::from(sample_rate) << 44)
        | (u64::from(channels - 1) << 41)
        | (15u64 << 36)
        | (total_samples & 0xF_FFFF_FFFF);
    info.extend_from_slice(&packed.to_be_bytes());
    info.extend_from_slice(&[0u8; 16]);
    blocks.push((0, info));

    if !comments.is_empty() {
        blocks.push((4, vorbis_comment_block(comments)));
    }

    for picture in pictures {
        blocks.push((6, picture_block(picture)));
    }

    let mut out = b"fLaC".to_vec();
    let last = blocks.len() - 1;
    for (i, (block_type, body)) in blocks.into_iter().enumerate() {
        let flag = if i == last { 0x80 } else { 0 };
        out.push(flag | block_type);
        out.extend_from_slice(&(body.len() as u32).to_be_bytes()[1..]);
        out.extend_from_slice(&body);
    }
    out
}

/// MPEG-1 Layer III, 128 kbps, 44.1 kHz, joint stereo, no padding.
const MPEG_FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];
const MPEG_FRAME_LEN: usize = 417;

/// An ID3v2.4 frame. Text is written as UTF-8.
pub enum Id3v2Frame<'a> {
    Text(&'a str, &'a str),
    /// `APIC`, front cover, `image/png`.
    Cover {
        description: &'a str,
        data: &'a [u8],
    },
}

pub struct Id3v1<'a> {
    pub title: &'a str,
    pub artist: &'a str,
    pub album: &'a str,
    pub year: &'a str,
}

fn syncsafe(n: usize) -> [u8; 4] {
    let n = n as u32;
    [
        ((n >> 21) & 0x7F) as u8,
        ((n >> 14) & 0x7F) as u8,
        ((n >> 7) & 0x7F) as u8,
        (n & 0x7F) as u8,
    ]
}

/// Build an MP3: optional ID3v2.4 tag, `frame_count` silent CBR frames and
/// an optional trailing ID3v1 tag.
pub fn mp3_bytes(
    frame_count: usize,
    id3v2: &[Id3v2Frame<'_>],
    id3v1: Option<&Id3v1<'_>>,
) -> Vec<u8> {
    let mut out = Vec::new();

    if !id3v2.is_empty() {
        let mut body = Vec::new();
        for frame in id3v2 {
            let mut content = vec![3u8];
            let id = match frame {
                Id3v2Frame::Text(id, text) => {
                    content.extend_from_slice(text.as_bytes());
                    *id
                }
                Id3v2Frame::Cover { description, data } => {
                    content.extend_from_slice(b"image/png\0");
                    content.push(3);
                    content.extend_from_slice(description.as_bytes());
                    content.push(0);
                    content.extend_from_slice(data);
                    "APIC"
                }
            };
            body.extend_from_slice(id.as_bytes());
            body.extend_from_slice(&syncsafe(content.len()));
            body.extend_from_slice(&[0, 0]);
            body.extend_from_slice(&content);
        }

        out.extend_from_slice(b"ID3\x04\x00\x00");
        out.extend_from_slice(&syncsafe(body.len()));
        out.extend_from_slice(&body);
    }

    for _ in 0..frame_count {
        out.extend_from_slice(&MPEG_FRAME_HEADER);
        out.resize(out.len() + MPEG_FRAME_LEN - MPEG_FRAME_HEADER.len(), 0);
    }

    if let Some(tag) = id3v1 {
        out.extend_from_slice(b"TAG");
        // title, artist, album, year, comment
        for (field, width) in [
            (tag.title, 30),
            (tag.artist, 30),
            (tag.album, 30),
            (tag.year, 4),
            ("", 30),
        ] {
            let mut bytes = field.as_bytes().to_vec();
            bytes.resize(width, 0);
            out.extend_from_slice(&bytes);
        }
        // No genre.
        out.push(0xFF);
    }

    out
}

fn ogg_page(header_type: u8, granule: u64, sequence: u32, packets: &[&[u8]]) -> Vec<u8> {
    let mut lacing = Vec::new();
    for packet in packets {
        lacing.extend(std::iter::repeat_n(255u8, packet.len() / 255));
        lacing.push((packet.len() % 255) as u8);
    }

    let mut page = b"OggS".to_vec();
    page.push(0);
    page.push(header_type);
    page.extend_from_slice(&granule.to_le_bytes());
    page.extend_from_slice(&1u32.to_le_bytes());
    page.extend_from_slice(&sequence.to_le_bytes());
    // CRC left zero.
    page.extend_from_slice(&0u32.to_le_bytes());
    page.push(lacing.len() as u8);
    page.extend_from_slice(&lacing);
    for packet in packets {
        page.extend_from_slice(packet);
    }
    page
}

/// Build an Ogg Vorbis stream: identification page, comment and setup
/// headers on a second page, then one audio page ending at `total_samples`.
pub fn ogg_vorbis_bytes(
    sample_rate: u32,
    channels: u8,
    total_samples: u64,
    nominal_bitrate: i32,
    comments: &[(&str, &str)],
) -> Vec<u8> {
    let mut ident = b"\x01vorbis".to_vec();
    ident.extend_from_slice(&0u32.to_le_bytes());
    ident.push(channels);
    ident.extend_from_slice(&sample_rate.to_le_bytes());
    ident.extend_from_slice(&0i32.to_le_bytes());
    ident.extend_from_slice(&nominal_bitrate.to_le_bytes());
    ident.extend_from_slice(&0i32.to_le_bytes());
    ident.push(0xB8);
    ident.push(1);

    let mut comment = b"\x03vorbis".to_vec();
    comment.extend_from_slice(&vorbis_comment_block(comments));
    comment.push(1);

    let setup = b"\x05vorbis\x00".to_vec();
    let audio = [0u8; 16];

    let mut out = ogg_page(0x02, 0, 0, &[ident.as_slice()]);
    out.extend_from_slice(&ogg_page(0x00, 0, 1, &[comment.as_slice(), setup.as_slice()]));
    out.extend_from_slice(&ogg_page(0x04, total_samples, 2, &[audio.as_slice()]));
    out
}

fn atom(ident: &[u8; 4], body: &[u8]) -> Vec<u8> {
    let mut out = ((body.len() + 8) as u32).to_be_bytes().to_vec();
    out.extend_from_slice(ident);
    out.extend_from_slice(body);
    out
}

/// `ilst` data atom: well-known type set, `data_type`, default locale.
fn data_atom(data_type: u8, value: &[u8]) -> Vec<u8> {
    let mut body = vec![0, 0, 0, data_type, 0, 0, 0, 0];
    body.extend_from_slice(value);
    atom(b"data", &body)
}

/// Build a minimal M4A: `ftyp`, one AAC sound track whose `mdhd` gives the
/// duration, an `ilst` with UTF-8 text atoms and PNG `covr` entries, and an
/// `mdat` of `mdat_len` zero bytes.
pub fn m4a_bytes(
    timescale: u32,
    duration: u32,
    channels: u16,
    text_atoms: &[([u8; 4], &str)],
    covers: &[&[u8]],
    mdat_len: usize,
) -> Vec<u8> {
    let mut ftyp = b"M4A ".to_vec();
    ftyp.extend_from_slice(&0u32.to_be_bytes());
    ftyp.extend_from_slice(b"M4A isom");

    let mut mdhd = vec![0u8; 12];
    mdhd.extend_from_slice(&timescale.to_be_bytes());
    mdhd.extend_from_slice(&duration.to_be_bytes());
    mdhd.extend_from_slice(&[0u8; 4]);

    let mut hdlr = vec![0u8; 8];
    hdlr.extend_from_slice(b"soun");
    hdlr.extend_from_slice(&[0u8; 13]);

    // Sample entry: reserved, data reference index, version, revision, vendor.
    let mut mp4a = vec![0u8; 6];
    mp4a.extend_from_slice(&1u16.to_be_bytes());
    mp4a.extend_from_slice(&[0u8; 8]);
    mp4a.extend_from_slice(&channels.to_be_bytes());
    mp4a.extend_from_slice(&16u16.to_be_bytes());
    mp4a.extend_from_slice(&[0u8; 4]);
    // Sample rate, 16.16 fixed point; the timescale doubles as the rate.
    mp4a.extend_from_slice(&(timescale << 16).to_be_bytes());

    let mut stsd = vec![0u8; 4];
    stsd.extend_from_slice(&1u32.to_be_bytes());
    stsd.extend_from_slice(&atom(b"mp4a", &mp4a));

    let stbl = atom(b"stbl", &atom(b"stsd", &stsd));
    let minf = atom(b"minf", &stbl);
    let mdia = atom(
        b"mdia",
        &[atom(b"mdhd", &mdhd), atom(b"hdlr", &hdlr), minf].concat(),
    );
    let trak = atom(b"trak", &mdia);

    let mut items = Vec::new();
    for (code, text) in text_atoms {
        items.extend_from_slice(&atom(code, &data_atom(1, text.as_bytes())));
    }
    if !covers.is_empty() {
        let data: Vec<u8> = covers.iter().flat_map(|c| data_atom(14, c)).collect();
        items.extend_from_slice(&atom(b"covr", &data));
    }
    let mut meta = vec![0u8; 4];
    meta.extend_from_slice(&atom(b"ilst", &items));
    let udta = atom(b"udta", &atom(b"meta", &meta));

    let moov = atom(b"moov", &[trak, udta].concat());

    [atom(b"ftyp", &ftyp), moov, atom(b"mdat", &vec![0u8; mdat_len])].concat()
}

pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}
