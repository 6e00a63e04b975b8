//! Copy command implementation
//!
//! Re-encodes a WAVE file frame by frame through the reader and writer.

use std::fs::{self, File};
use std::io::{BufWriter, Read};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{info, warn};
use wavcodec::{WavError, WavReader, WavWriter};

use super::open_reader;

/// Copies every frame of `input` into a new file at `output`.
///
/// Frames go through the integer path. A 32-bit stream copies byte for byte
/// whether it holds integers or floats. 24-bit input is rejected before
/// `output` is created, and a copy that fails midway removes `output`.
/// Returns the number of frames copied.
pub fn copy_file(input: &Path, output: &Path) -> Result<u32> {
    let mut reader = open_reader(input)?;

    let bits_per_sample = reader.bits_per_sample();
    if bits_per_sample == 24 {
        let err = WavError::UnsupportedEncoding {
            operation: "write_int",
            bits_per_sample,
        };
        return Err(anyhow::Error::new(err).context(format!("Cannot copy {}", input.display())));
    }

    let file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;

    match copy_frames(&mut reader, file, input, output) {
        Ok(frame_count) => {
            info!(frames = frame_count, "copied {} to {}", input.display(), output.display());
            Ok(frame_count)
        }
        Err(e) => {
            if let Err(remove_err) = fs::remove_file(output) {
                warn!(error = %remove_err, "failed to remove partial output {}", output.display());
            }
            Err(e)
        }
    }
}

fn copy_frames<R: Read>(
    reader: &mut WavReader<R>,
    file: File,
    input: &Path,
    output: &Path,
) -> Result<u32> {
    let frame_count = reader.sample_count();
    let mut writer = WavWriter::new(BufWriter::new(file), reader.format(), frame_count)
        .with_context(|| format!("Failed to write WAVE header to {}", output.display()))?;

    for index in 0..frame_count {
        let frame = reader
            .read_int()
            .with_context(|| format!("Failed to read frame {index} of {}", input.display()))?;
        writer
            .write_int(&frame)
            .with_context(|| format!("Failed to write frame {index} to {}", output.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", output.display()))?;

    Ok(frame_count)
}

/// Run the copy command
pub fn run(input: &str, output: &str) -> Result<ExitCode> {
    let frames = copy_file(Path::new(input), Path::new(output))?;
    println!("Copied {frames} frames: {input} -> {output}");
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wavcodec::{Header, WavFormat};

    #[test]
    fn test_copy_is_byte_exact() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.wav");
        let output = dir.path().join("out.wav");

        let format = WavFormat::new(2, 22050, 8);
        let mut writer = WavWriter::new(Vec::new(), format, 64).unwrap();
        for i in 0..64i64 {
            writer.write_int(&[i * 2 - 64, 63 - i]).unwrap();
        }
        let original = writer.into_inner();
        std::fs::write(&input, &original).unwrap();

        assert_eq!(copy_file(&input, &output).unwrap(), 64);
        assert_eq!(std::fs::read(&output).unwrap(), original);
    }

    #[test]
    fn test_copy_float_stream_is_byte_exact() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.wav");
        let output = dir.path().join("out.wav");

        let format = WavFormat::new(1, 48000, 32);
        let mut writer = WavWriter::new(Vec::new(), format, 3).unwrap();
        for sample in [-1.0, 0.125, 0.999] {
            writer.write_float(&[sample]).unwrap();
        }
        let original = writer.into_inner();
        std::fs::write(&input, &original).unwrap();

        copy_file(&input, &output).unwrap();
        assert_eq!(std::fs::read(&output).unwrap(), original);
    }

    #[test]
    fn test_copy_24_bit_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.wav");
        let output = dir.path().join("out.wav");

        let mut bytes = Header::pcm(1, 48000, 24, 1).to_bytes().to_vec();
        bytes.extend_from_slice(&[1, 2, 3]);
        std::fs::write(&input, bytes).unwrap();

        let err = copy_file(&input, &output).unwrap_err();
        let cause = err.downcast_ref::<WavError>().unwrap();
        assert!(matches!(
            cause,
            WavError::UnsupportedEncoding {
                bits_per_sample: 24,
                ..
            }
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_copy_24_bit_keeps_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.wav");
        let output = dir.path().join("out.wav");

        let mut bytes = Header::pcm(1, 48000, 24, 1).to_bytes().to_vec();
        bytes.extend_from_slice(&[1, 2, 3]);
        std::fs::write(&input, bytes).unwrap();
        std::fs::write(&output, b"keep").unwrap();

        assert!(copy_file(&input, &output).is_err());
        assert_eq!(std::fs::read(&output).unwrap(), b"keep");
    }

    #[test]
    fn test_copy_truncated_input_removes_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.wav");
        let output = dir.path().join("out.wav");

        // Header declares four 16-bit frames; only two are present.
        let mut bytes = Header::pcm(1, 8000, 16, 4).to_bytes().to_vec();
        bytes.extend_from_slice(&[1, 0, 2, 0]);
        std::fs::write(&input, bytes).unwrap();

        let err = copy_file(&input, &output).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<WavError>(),
            Some(WavError::TruncatedStream)
        ));
        assert!(!output.exists());
    }
}
