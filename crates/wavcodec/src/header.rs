//! Canonical 44-byte PCM WAVE header.
//!
//! Layout (all multi-byte fields little-endian):
//!
//! | offset | size | field         | constraint                        |
//! |-------:|-----:|---------------|-----------------------------------|
//! |      0 |    4 | riffID        | `"RIFF"`                          |
//! |      4 |    4 | dataSize      | `36 + dataChunkSize`              |
//! |      8 |    4 | riffType      | `"WAVE"`                          |
//! |     12 |    4 | fmtChunkID    | `"fmt "`                          |
//! |     16 |    4 | fmtChunkSize  | `16`                              |
//! |     20 |    2 | audioFmt      | `1` (uncompressed PCM)            |
//! |     22 |    2 | channels      | `> 0`                             |
//! |     24 |    4 | samplesPerSec |                                   |
//! |     28 |    4 | bytesPerSec   | `samplesPerSec * blockAlign`      |
//! |     32 |    2 | blockAlign    | `channels * bitsPerSample / 8`    |
//! |     34 |    2 | bitsPerSample | 8, 16, 24 or 32                   |
//! |     36 |    4 | dataChunkID   | `"data"`                          |
//! |     40 |    4 | dataChunkSize | `frames * blockAlign`             |
//!
//! Extended `fmt ` chunks, non-PCM formats and any other chunk are rejected.

use std::io::{self, Read, Write};

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{WavError, WavResult};
use crate::format::{SampleWidth, WavFormat};

/// RIFF container identifier.
pub const RIFF_ID: &[u8; 4] = b"RIFF";

/// RIFF form type for WAVE files.
pub const WAVE_TYPE: &[u8; 4] = b"WAVE";

/// Format chunk identifier.
pub const FMT_CHUNK_ID: &[u8; 4] = b"fmt ";

/// Data chunk identifier.
pub const DATA_CHUNK_ID: &[u8; 4] = b"data";

/// Size of the `fmt ` chunk body for plain PCM.
pub const PCM_FMT_CHUNK_SIZE: u32 = 16;

/// `audioFmt` tag for uncompressed PCM.
pub const PCM_AUDIO_FORMAT: u16 = 1;

/// Bytes between the `dataSize` field and the start of the data payload.
const RIFF_OVERHEAD: u32 = 36;

/// A canonical PCM WAVE header.
///
/// Fields mirror the on-disk layout one to one. A decoded header is only
/// trusted after [`Header::validate`] succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Container identifier, `"RIFF"`.
    pub riff_id: [u8; 4],
    /// Size of everything after this field: `36 + data_chunk_size`.
    pub data_size: u32,
    /// Form type, `"WAVE"`.
    pub riff_type: [u8; 4],
    /// Format chunk identifier, `"fmt "`.
    pub fmt_chunk_id: [u8; 4],
    /// Format chunk body size, 16 for PCM.
    pub fmt_chunk_size: u32,
    /// Audio format tag, 1 for PCM.
    pub audio_fmt: u16,
    /// Number of interleaved channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub samples_per_sec: u32,
    /// Average bytes per second.
    pub bytes_per_sec: u32,
    /// Bytes per frame.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Data chunk identifier, `"data"`.
    pub data_chunk_id: [u8; 4],
    /// Size of the sample payload in bytes.
    pub data_chunk_size: u32,
}

impl Header {
    /// Encoded header size in bytes.
    pub const SIZE: usize = 44;

    /// Builds the header for a PCM stream of `frame_count` frames.
    ///
    /// All derived fields are computed in 64 bits and truncated to their
    /// on-disk width. Overflow is not detected: a `frame_count` whose payload
    /// does not fit in 32 bits produces a header with wrapped sizes.
    pub fn pcm(
        channels: u16,
        samples_per_sec: u32,
        bits_per_sample: u16,
        frame_count: u32,
    ) -> Self {
        let channels_wide = u64::from(channels);
        let bits_wide = u64::from(bits_per_sample);
        let data_chunk_size = (u64::from(frame_count) * channels_wide * bits_wide / 8) as u32;

        Self {
            riff_id: *RIFF_ID,
            data_size: RIFF_OVERHEAD.wrapping_add(data_chunk_size),
            riff_type: *WAVE_TYPE,
            fmt_chunk_id: *FMT_CHUNK_ID,
            fmt_chunk_size: PCM_FMT_CHUNK_SIZE,
            audio_fmt: PCM_AUDIO_FORMAT,
            channels,
            samples_per_sec,
            bytes_per_sec: (u64::from(samples_per_sec) * channels_wide * bits_wide / 8) as u32,
            block_align: (channels_wide * bits_wide / 8) as u16,
            bits_per_sample,
            data_chunk_id: *DATA_CHUNK_ID,
            data_chunk_size,
        }
    }

    /// Builds the header for `format` and `frame_count` frames.
    pub fn for_format(format: &WavFormat, frame_count: u32) -> Self {
        Self::pcm(
            format.channels,
            format.sample_rate,
            format.bits_per_sample,
            frame_count,
        )
    }

    /// Decodes a header from exactly 44 bytes.
    pub fn from_bytes(bytes: &[u8; Self::SIZE]) -> Self {
        Self {
            riff_id: fourcc(&bytes[0..4]),
            data_size: LittleEndian::read_u32(&bytes[4..8]),
            riff_type: fourcc(&bytes[8..12]),
            fmt_chunk_id: fourcc(&bytes[12..16]),
            fmt_chunk_size: LittleEndian::read_u32(&bytes[16..20]),
            audio_fmt: LittleEndian::read_u16(&bytes[20..22]),
            channels: LittleEndian::read_u16(&bytes[22..24]),
            samples_per_sec: LittleEndian::read_u32(&bytes[24..28]),
            bytes_per_sec: LittleEndian::read_u32(&bytes[28..32]),
            block_align: LittleEndian::read_u16(&bytes[32..34]),
            bits_per_sample: LittleEndian::read_u16(&bytes[34..36]),
            data_chunk_id: fourcc(&bytes[36..40]),
            data_chunk_size: LittleEndian::read_u32(&bytes[40..44]),
        }
    }

    /// Encodes the header into its 44-byte on-disk form.
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.riff_id);
        LittleEndian::write_u32(&mut bytes[4..8], self.data_size);
        bytes[8..12].copy_from_slice(&self.riff_type);
        bytes[12..16].copy_from_slice(&self.fmt_chunk_id);
        LittleEndian::write_u32(&mut bytes[16..20], self.fmt_chunk_size);
        LittleEndian::write_u16(&mut bytes[20..22], self.audio_fmt);
        LittleEndian::write_u16(&mut bytes[22..24], self.channels);
        LittleEndian::write_u32(&mut bytes[24..28], self.samples_per_sec);
        LittleEndian::write_u32(&mut bytes[28..32], self.bytes_per_sec);
        LittleEndian::write_u16(&mut bytes[32..34], self.block_align);
        LittleEndian::write_u16(&mut bytes[34..36], self.bits_per_sample);
        bytes[36..40].copy_from_slice(&self.data_chunk_id);
        LittleEndian::write_u32(&mut bytes[40..44], self.data_chunk_size);
        bytes
    }

    /// Reads exactly 44 bytes from `reader` and decodes them.
    ///
    /// No validation is performed. Fails with [`WavError::MalformedHeader`]
    /// if the stream ends early.
    pub fn read_from<R: Read>(reader: &mut R) -> WavResult<Self> {
        let mut bytes = [0u8; Self::SIZE];
        reader.read_exact(&mut bytes).map_err(|e| {
            if e.kind() == io::ErrorKind::UnexpectedEof {
                WavError::MalformedHeader {
                    expected: Self::SIZE,
                }
            } else {
                WavError::Io(e)
            }
        })?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Writes the encoded header to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.to_bytes())
    }

    /// Checks that the header describes a supported PCM stream.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// riffID, riffType, fmtChunkID, dataChunkID, fmtChunkSize, dataSize,
    /// audioFmt, bitsPerSample, then channels. On success the decoded
    /// sample width is returned.
    pub fn validate(&self) -> WavResult<SampleWidth> {
        check_fourcc("riffID", RIFF_ID, &self.riff_id)?;
        check_fourcc("riffType", WAVE_TYPE, &self.riff_type)?;
        check_fourcc("fmtChunkID", FMT_CHUNK_ID, &self.fmt_chunk_id)?;
        check_fourcc("dataChunkID", DATA_CHUNK_ID, &self.data_chunk_id)?;

        if self.fmt_chunk_size != PCM_FMT_CHUNK_SIZE {
            return Err(WavError::invalid_field(
                "fmtChunkSize",
                PCM_FMT_CHUNK_SIZE,
                self.fmt_chunk_size,
            ));
        }

        let expected_data_size = u64::from(RIFF_OVERHEAD) + u64::from(self.data_chunk_size);
        if u64::from(self.data_size) != expected_data_size {
            return Err(WavError::invalid_field(
                "dataSize",
                expected_data_size,
                self.data_size,
            ));
        }

        if self.audio_fmt != PCM_AUDIO_FORMAT {
            return Err(WavError::invalid_field(
                "audioFmt",
                PCM_AUDIO_FORMAT,
                self.audio_fmt,
            ));
        }

        let Some(width) = self.sample_width() else {
            return Err(WavError::invalid_field(
                "bitsPerSample",
                "one of 8, 16, 24, 32",
                self.bits_per_sample,
            ));
        };

        if self.channels == 0 {
            return Err(WavError::invalid_field("channels", "at least 1", 0));
        }

        Ok(width)
    }

    /// Number of whole frames in the data chunk.
    ///
    /// Integer division: a trailing partial frame is silently dropped.
    /// Returns 0 when the frame size is zero.
    pub fn sample_count(&self) -> u32 {
        self.data_chunk_size
            .checked_div(self.frame_size())
            .unwrap_or(0)
    }

    /// Bytes per frame as derived from channels and bit depth.
    pub fn frame_size(&self) -> u32 {
        u32::from(self.channels) * u32::from(self.bits_per_sample / 8)
    }

    /// Sample width, if the bit depth is supported.
    pub fn sample_width(&self) -> Option<SampleWidth> {
        SampleWidth::from_bits(self.bits_per_sample)
    }

    /// Format parameters carried by the header.
    pub fn format(&self) -> WavFormat {
        WavFormat::new(self.channels, self.samples_per_sec, self.bits_per_sample)
    }

    /// Playback duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.samples_per_sec == 0 {
            return 0.0;
        }
        f64::from(self.sample_count()) / f64::from(self.samples_per_sec)
    }
}

fn fourcc(bytes: &[u8]) -> [u8; 4] {
    [bytes[0], bytes[1], bytes[2], bytes[3]]
}

fn check_fourcc(field: &'static str, expected: &[u8; 4], actual: &[u8; 4]) -> WavResult<()> {
    if actual == expected {
        return Ok(());
    }
    Err(WavError::invalid_field(
        field,
        format!("{:?}", String::from_utf8_lossy(expected)),
        format!("{:?}", String::from_utf8_lossy(actual)),
    ))
}
