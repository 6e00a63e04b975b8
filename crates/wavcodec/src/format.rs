//! WAVE stream format parameters.

use serde::{Deserialize, Serialize};

/// Format parameters for a PCM WAVE stream.
///
/// This is the configuration a [`WavWriter`](crate::WavWriter) is opened with,
/// and what a [`Header`](crate::Header) reports back once decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample: 8, 16, 24 or 32.
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a format from its three parameters.
    pub fn new(channels: u16, sample_rate: u32, bits_per_sample: u16) -> Self {
        Self {
            channels,
            sample_rate,
            bits_per_sample,
        }
    }

    /// Creates a mono 16-bit format.
    pub fn mono(sample_rate: u32) -> Self {
        Self::new(1, sample_rate, 16)
    }

    /// Creates a stereo 16-bit format.
    pub fn stereo(sample_rate: u32) -> Self {
        Self::new(2, sample_rate, 16)
    }

    /// Returns the same format with a different bit depth.
    pub fn with_bits_per_sample(self, bits_per_sample: u16) -> Self {
        Self {
            bits_per_sample,
            ..self
        }
    }

    /// Bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per frame. Truncated to 16 bits like the on-disk field.
    pub fn block_align(&self) -> u16 {
        (u64::from(self.channels) * u64::from(self.bytes_per_sample())) as u16
    }

    /// Bytes per second. Truncated to 32 bits like the on-disk field.
    pub fn byte_rate(&self) -> u32 {
        (u64::from(self.sample_rate)
            * u64::from(self.channels)
            * u64::from(self.bits_per_sample)
            / 8) as u32
    }
}

/// Sample width of a validated stream.
///
/// Only produced from a bit depth that passed header validation, so every
/// decode and encode path matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleWidth {
    /// 8-bit signed integer.
    Bits8,
    /// 16-bit signed little-endian integer.
    Bits16,
    /// 24-bit signed little-endian integer (3 bytes).
    Bits24,
    /// 32-bit little-endian integer or IEEE float.
    Bits32,
}

impl SampleWidth {
    /// Maps a `bitsPerSample` value to a width, if supported.
    pub fn from_bits(bits_per_sample: u16) -> Option<Self> {
        match bits_per_sample {
            8 => Some(SampleWidth::Bits8),
            16 => Some(SampleWidth::Bits16),
            24 => Some(SampleWidth::Bits24),
            32 => Some(SampleWidth::Bits32),
            _ => None,
        }
    }

    /// Bit depth.
    pub fn bits(self) -> u16 {
        match self {
            SampleWidth::Bits8 => 8,
            SampleWidth::Bits16 => 16,
            SampleWidth::Bits24 => 24,
            SampleWidth::Bits32 => 32,
        }
    }

    /// Encoded size of one sample in bytes.
    pub fn bytes(self) -> usize {
        usize::from(self.bits() / 8)
    }
}
