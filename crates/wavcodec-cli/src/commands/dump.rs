//! Dump command implementation
//!
//! Prints decoded frames from the start of a WAVE file.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use super::open_reader;

/// Decoded frames, one row per frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Frames {
    /// Integer samples.
    Int(Vec<Vec<i64>>),
    /// 32-bit float samples.
    Float(Vec<Vec<f64>>),
}

/// Reads up to `limit` frames from `path`.
pub fn read_frames(path: &Path, limit: u32, float: bool) -> Result<Frames> {
    let mut reader = open_reader(path)?;
    let count = reader.sample_count().min(limit);

    if float {
        let frames = (0..count)
            .map(|i| {
                reader
                    .read_float()
                    .with_context(|| format!("Failed to read frame {i}"))
            })
            .collect::<Result<_>>()?;
        Ok(Frames::Float(frames))
    } else {
        let frames = (0..count)
            .map(|i| {
                reader
                    .read_int()
                    .with_context(|| format!("Failed to read frame {i}"))
            })
            .collect::<Result<_>>()?;
        Ok(Frames::Int(frames))
    }
}

/// Run the dump command
pub fn run(input: &str, frames: u32, float: bool) -> Result<ExitCode> {
    match read_frames(Path::new(input), frames, float)? {
        Frames::Int(rows) => print_rows(&rows),
        Frames::Float(rows) => print_rows(&rows),
    }
    Ok(ExitCode::SUCCESS)
}

fn print_rows<T: std::fmt::Display>(rows: &[Vec<T>]) {
    for (index, row) in rows.iter().enumerate() {
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        println!("{index:>8}: {}", cells.join("\t"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wavcodec::{WavFormat, WavWriter};

    fn write_file(dir: &Path, format: WavFormat) -> std::path::PathBuf {
        let path = dir.join("dump.wav");
        let mut writer = WavWriter::new(Vec::new(), format, 3).unwrap();
        for i in 0..3i64 {
            if format.bits_per_sample == 32 {
                writer.write_float(&[i as f64 * 0.25]).unwrap();
            } else {
                writer.write_int(&[i - 1]).unwrap();
            }
        }
        std::fs::write(&path, writer.into_inner()).unwrap();
        path
    }

    #[test]
    fn test_read_int_frames_with_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), WavFormat::mono(8000));

        let frames = read_frames(&path, 2, false).unwrap();
        assert_eq!(frames, Frames::Int(vec![vec![-1], vec![0]]));

        let frames = read_frames(&path, 100, false).unwrap();
        assert_eq!(frames, Frames::Int(vec![vec![-1], vec![0], vec![1]]));
    }

    #[test]
    fn test_read_float_frames() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), WavFormat::new(1, 8000, 32));

        let frames = read_frames(&path, 16, true).unwrap();
        assert_eq!(frames, Frames::Float(vec![vec![0.0], vec![0.25], vec![0.5]]));
    }

    #[test]
    fn test_float_dump_of_16_bit_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), WavFormat::mono(8000));

        let err = read_frames(&path, 16, true).unwrap_err();
        assert!(format!("{err:#}").contains("not supported"));
    }
}
