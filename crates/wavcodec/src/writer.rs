//! Sequential frame writer for PCM WAVE streams.

use std::io::Write;

use byteorder::{ByteOrder, LittleEndian};
use tracing::{debug, trace};

use crate::error::{WavError, WavResult};
use crate::format::{SampleWidth, WavFormat};
use crate::header::Header;

/// Writes frames to a PCM WAVE stream.
///
/// The header is written once, up front, by [`WavWriter::new`], so the frame
/// count must be known in advance. Nothing rewrites the header afterwards:
/// writing fewer frames than declared leaves a file whose header claims more
/// data than it holds.
///
/// Samples are narrowed to the stream's width with a truncating cast. There
/// is no clipping and no overflow check.
#[derive(Debug)]
pub struct WavWriter<W> {
    writer: W,
    header: Header,
    frame_count: u32,
    written: u32,
    frame: Vec<u8>,
}

impl<W: Write> WavWriter<W> {
    /// Writes the header for `frame_count` frames of `format` to `writer`.
    ///
    /// The format is not validated; the header is built from whatever
    /// parameters are supplied.
    pub fn new(mut writer: W, format: WavFormat, frame_count: u32) -> WavResult<Self> {
        let header = Header::for_format(&format, frame_count);
        header.write_to(&mut writer).map_err(WavError::WriteFailed)?;

        debug!(
            channels = format.channels,
            sample_rate = format.sample_rate,
            bits_per_sample = format.bits_per_sample,
            frame_count,
            "opened WAVE writer"
        );

        Ok(Self {
            writer,
            header,
            frame_count,
            written: 0,
            frame: Vec::new(),
        })
    }

    /// Writes one frame of integer samples, one value per channel.
    ///
    /// Supported for 8, 16 and 32-bit streams. 24-bit streams can be read
    /// but not written.
    pub fn write_int(&mut self, samples: &[i64]) -> WavResult<()> {
        self.check_frame(samples.len())?;

        match SampleWidth::from_bits(self.header.bits_per_sample) {
            Some(SampleWidth::Bits8) => {
                self.encode_frame(samples, 1, |slot, s| slot[0] = s as i8 as u8)
            }
            Some(SampleWidth::Bits16) => {
                self.encode_frame(samples, 2, |slot, s| LittleEndian::write_i16(slot, s as i16))
            }
            Some(SampleWidth::Bits32) => {
                self.encode_frame(samples, 4, |slot, s| LittleEndian::write_i32(slot, s as i32))
            }
            Some(SampleWidth::Bits24) | None => {
                return Err(WavError::UnsupportedEncoding {
                    operation: "write_int",
                    bits_per_sample: self.header.bits_per_sample,
                })
            }
        }

        trace!(?samples, "write int frame");
        self.commit_frame()
    }

    /// Writes one frame of float samples, narrowed to 32-bit IEEE floats.
    ///
    /// Only valid for 32-bit streams.
    pub fn write_float(&mut self, samples: &[f64]) -> WavResult<()> {
        self.check_frame(samples.len())?;

        if self.header.bits_per_sample != 32 {
            return Err(WavError::UnsupportedEncoding {
                operation: "write_float",
                bits_per_sample: self.header.bits_per_sample,
            });
        }

        self.encode_frame(samples, 4, |slot, s| LittleEndian::write_f32(slot, s as f32));

        trace!(?samples, "write float frame");
        self.commit_frame()
    }

    /// Flushes the underlying sink.
    pub fn flush(&mut self) -> WavResult<()> {
        self.writer.flush().map_err(WavError::WriteFailed)
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

    /// Number of frames declared in the header.
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Number of frames written so far.
    pub fn frames_written(&self) -> u32 {
        self.written
    }

    /// The header that was written.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Releases the underlying sink without flushing it.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn check_frame(&self, len: usize) -> WavResult<()> {
        let channels = usize::from(self.header.channels);
        if len != channels {
            return Err(WavError::ChannelCountMismatch {
                expected: channels,
                actual: len,
            });
        }
        if u64::from(self.written) + 1 > u64::from(self.frame_count) {
            return Err(WavError::FrameBudgetExceeded {
                frame_count: self.frame_count,
            });
        }
        Ok(())
    }

    /// Encodes `samples` into the frame buffer, `bytes` per sample.
    fn encode_frame<T: Copy>(
        &mut self,
        samples: &[T],
        bytes: usize,
        encode: impl Fn(&mut [u8], T),
    ) {
        self.frame.resize(samples.len() * bytes, 0);
        for (slot, &sample) in self.frame.chunks_exact_mut(bytes).zip(samples) {
            encode(slot, sample);
        }
    }

    fn commit_frame(&mut self) -> WavResult<()> {
        self.writer
            .write_all(&self.frame)
            .map_err(WavError::WriteFailed)?;
        self.written += 1;
        Ok(())
    }
}
