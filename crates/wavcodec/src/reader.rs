//! Sequential frame reader for PCM WAVE streams.

use std::io::Read;

use byteorder::{ByteOrder, LittleEndian};
use tracing::{debug, trace, warn};

use crate::error::{WavError, WavResult};
use crate::format::{SampleWidth, WavFormat};
use crate::header::Header;

/// Reads frames from a PCM WAVE stream.
///
/// The header is decoded and validated once in [`WavReader::new`]. Each
/// subsequent `read_*` call consumes exactly one frame (`block_align` bytes).
/// The stream position is the only cursor: there is no seeking, peeking or
/// end-of-data check. Callers read [`WavReader::sample_count`] frames and
/// stop; reading past the end fails with [`WavError::TruncatedStream`].
///
/// The reader does no buffering beyond one frame. Wrap files in a
/// `BufReader` for throughput.
#[derive(Debug)]
pub struct WavReader<R> {
    reader: R,
    header: Header,
    width: SampleWidth,
    frame: Vec<u8>,
}

impl<R: Read> WavReader<R> {
    /// Reads and validates the header from `reader`.
    ///
    /// On failure the stream is left wherever the header read stopped; it is
    /// not rewound.
    pub fn new(mut reader: R) -> WavResult<Self> {
        let header = Header::read_from(&mut reader)?;
        let width = header.validate()?;

        if header.data_chunk_size % header.frame_size() != 0 {
            warn!(
                data_chunk_size = header.data_chunk_size,
                frame_size = header.frame_size(),
                "data chunk is not a whole number of frames; trailing bytes will not be read"
            );
        }

        debug!(
            channels = header.channels,
            sample_rate = header.samples_per_sec,
            bits_per_sample = header.bits_per_sample,
            frames = header.sample_count(),
            "opened WAVE reader"
        );

        let frame = vec![0u8; usize::from(header.channels) * width.bytes()];
        Ok(Self {
            reader,
            header,
            width,
            frame,
        })
    }

    /// Reads one frame as integers, one value per channel.
    ///
    /// Samples are sign-extended to `i64` without rescaling. 24-bit samples
    /// combine an unsigned 16-bit low part with a signed 8-bit high part.
    pub fn read_int(&mut self) -> WavResult<Vec<i64>> {
        self.fill_frame()?;

        let bytes = self.width.bytes();
        let samples = self
            .frame
            .chunks_exact(bytes)
            .map(|sample| match self.width {
                SampleWidth::Bits8 => i64::from(sample[0] as i8),
                SampleWidth::Bits16 => i64::from(LittleEndian::read_i16(sample)),
                SampleWidth::Bits24 => {
                    let low = i64::from(LittleEndian::read_u16(&sample[..2]));
                    let high = i64::from(sample[2] as i8);
                    (high << 16) + low
                }
                SampleWidth::Bits32 => i64::from(LittleEndian::read_i32(sample)),
            })
            .collect();

        trace!(?samples, "read int frame");
        Ok(samples)
    }

    /// Reads one frame of 32-bit IEEE floats, widened to `f64`.
    ///
    /// Only valid for 32-bit streams. On any other bit depth this fails with
    /// [`WavError::UnsupportedEncoding`] before touching the stream.
    pub fn read_float(&mut self) -> WavResult<Vec<f64>> {
        if self.width != SampleWidth::Bits32 {
            return Err(WavError::UnsupportedEncoding {
                operation: "read_float",
                bits_per_sample: self.header.bits_per_sample,
            });
        }

        self.fill_frame()?;

        let samples = self
            .frame
            .chunks_exact(4)
            .map(|sample| f64::from(LittleEndian::read_f32(sample)))
            .collect();

        trace!(?samples, "read float frame");
        Ok(samples)
    }

    /// Number of channels.
    pub fn channels(&self) -> u16 {
        self.header.channels
    }

    /// Bits per sample.
    pub fn bits_per_sample(&self) -> u16 {
        self.header.bits_per_sample
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.header.samples_per_sec
    }

    /// Number of frames declared by the header.
    pub fn sample_count(&self) -> u32 {
        self.header.sample_count()
    }

    /// Format parameters of the stream.
    pub fn format(&self) -> WavFormat {
        self.header.format()
    }

    /// The validated header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Releases the underlying stream, positioned after the last frame read.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn fill_frame(&mut self) -> WavResult<()> {
        self.reader
            .read_exact(&mut self.frame)
            .map_err(WavError::from_frame_read)
    }
}
