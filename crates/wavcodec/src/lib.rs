//! Reader and writer for canonical PCM WAVE streams.
//!
//! This crate handles the fixed 44-byte RIFF/WAVE header (`fmt ` chunk of
//! size 16 followed directly by `data`) and streams interleaved frames in and
//! out of it. Supported encodings:
//!
//! | bits | read int | read float | write int | write float |
//! |-----:|:--------:|:----------:|:---------:|:-----------:|
//! |    8 |    ✓     |            |     ✓     |             |
//! |   16 |    ✓     |            |     ✓     |             |
//! |   24 |    ✓     |            |           |             |
//! |   32 |    ✓     |     ✓      |     ✓     |      ✓      |
//!
//! Compressed and extensible formats, extra chunks and metadata are rejected.
//!
//! # Streams
//!
//! [`WavReader`] and [`WavWriter`] wrap any `Read`/`Write` and never open or
//! close files themselves. They buffer at most one frame, so wrap files in
//! `BufReader`/`BufWriter`. Frames are strictly sequential; there is no
//! seeking.
//!
//! # Example
//!
//! ```
//! use wavcodec::{WavFormat, WavReader, WavWriter};
//!
//! let mut writer = WavWriter::new(Vec::new(), WavFormat::stereo(44100), 2)?;
//! writer.write_int(&[100, -100])?;
//! writer.write_int(&[200, -200])?;
//! let bytes = writer.into_inner();
//! assert_eq!(bytes.len(), 44 + 8);
//!
//! let mut reader = WavReader::new(bytes.as_slice())?;
//! assert_eq!(reader.sample_count(), 2);
//! assert_eq!(reader.read_int()?, vec![100, -100]);
//! assert_eq!(reader.read_int()?, vec![200, -200]);
//! # Ok::<(), wavcodec::WavError>(())
//! ```
//!
//! # Known limitations
//!
//! - Header sizes derived by [`Header::pcm`] wrap silently when the payload
//!   does not fit in 32 bits.
//! - [`Header::sample_count`] drops a trailing partial frame.
//! - Integer writes narrow with a truncating cast.
//! - The header is written before any frame, so writing fewer frames than
//!   declared leaves a file that claims more data than it holds.

pub mod error;
pub mod format;
pub mod header;
pub mod reader;
pub mod writer;

pub use error::{WavError, WavResult};
pub use format::{SampleWidth, WavFormat};
pub use header::Header;
pub use reader::WavReader;
pub use writer::WavWriter;
