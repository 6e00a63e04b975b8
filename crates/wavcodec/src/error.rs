//! Error types for WAVE decoding and encoding.

use std::io;

use thiserror::Error;

/// Result type for WAVE operations.
pub type WavResult<T> = Result<T, WavError>;

/// Errors raised by the header codec, [`WavReader`](crate::WavReader) and
/// [`WavWriter`](crate::WavWriter).
///
/// Every error is terminal for the call that produced it. Nothing is retried
/// internally.
#[derive(Debug, Error)]
pub enum WavError {
    /// The stream ended before a full 44-byte header was available.
    #[error("malformed header: stream ended before {expected} header bytes were read")]
    MalformedHeader {
        /// Number of header bytes required.
        expected: usize,
    },

    /// The header was read but violates a format constant.
    #[error("invalid header field '{field}': expected {expected}, found {actual}")]
    InvalidHeaderField {
        /// Name of the offending field.
        field: &'static str,
        /// Expected value, rendered for display.
        expected: String,
        /// Value found in the header.
        actual: String,
    },

    /// The requested sample mode is not available for the stream's bit depth.
    #[error("{operation} is not supported for {bits_per_sample}-bit samples")]
    UnsupportedEncoding {
        /// Operation that was attempted.
        operation: &'static str,
        /// Bit depth declared by the header.
        bits_per_sample: u16,
    },

    /// A frame did not carry exactly one sample per channel.
    #[error("frame has {actual} samples but the stream has {expected} channels")]
    ChannelCountMismatch {
        /// Channel count declared by the header.
        expected: usize,
        /// Length of the rejected frame.
        actual: usize,
    },

    /// A write was attempted after the declared number of frames.
    #[error("frame budget exceeded: all {frame_count} declared frames were already written")]
    FrameBudgetExceeded {
        /// Frame count declared in the header.
        frame_count: u32,
    },

    /// The stream ended in the middle of a frame.
    #[error("stream ended in the middle of a frame")]
    TruncatedStream,

    /// The underlying sink rejected a write.
    #[error("write failed: {0}")]
    WriteFailed(#[source] io::Error),

    /// The underlying source failed for a reason other than end of data.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl WavError {
    /// Creates an invalid header field error.
    pub fn invalid_field(
        field: &'static str,
        expected: impl ToString,
        actual: impl ToString,
    ) -> Self {
        Self::InvalidHeaderField {
            field,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Returns a stable short code identifying the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            WavError::MalformedHeader { .. } => "WAV_001",
            WavError::InvalidHeaderField { .. } => "WAV_002",
            WavError::UnsupportedEncoding { .. } => "WAV_003",
            WavError::ChannelCountMismatch { .. } => "WAV_004",
            WavError::FrameBudgetExceeded { .. } => "WAV_005",
            WavError::TruncatedStream => "WAV_006",
            WavError::WriteFailed(_) => "WAV_007",
            WavError::Io(_) => "WAV_008",
        }
    }

    /// Maps a read failure while decoding a frame.
    pub(crate) fn from_frame_read(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            WavError::TruncatedStream
        } else {
            WavError::Io(err)
        }
    }
}
