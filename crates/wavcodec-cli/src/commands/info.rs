//! Info command implementation
//!
//! Prints the header of a WAVE file.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use wavcodec::WavFormat;

use super::open_reader;

/// Header summary emitted by `info --json`.
#[derive(Debug, Serialize)]
pub struct InfoReport {
    /// Path that was inspected.
    pub path: String,
    /// Stream format.
    pub format: WavFormat,
    /// Number of whole frames in the data chunk.
    pub sample_count: u32,
    /// Bytes per frame.
    pub block_align: u16,
    /// Declared bytes per second.
    pub bytes_per_sec: u32,
    /// Data chunk size in bytes.
    pub data_chunk_size: u32,
    /// Duration in seconds.
    pub duration_seconds: f64,
}

/// Builds the report for `path`.
pub fn inspect(path: &Path) -> Result<InfoReport> {
    let reader = open_reader(path)?;
    let header = reader.header();
    Ok(InfoReport {
        path: path.display().to_string(),
        format: reader.format(),
        sample_count: reader.sample_count(),
        block_align: header.block_align,
        bytes_per_sec: header.bytes_per_sec,
        data_chunk_size: header.data_chunk_size,
        duration_seconds: header.duration_seconds(),
    })
}

/// Run the info command
pub fn run(input: &str, json: bool) -> Result<ExitCode> {
    let report = inspect(Path::new(input))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", report.path.bold());
    println!("  channels:        {}", report.format.channels);
    println!("  sample rate:     {} Hz", report.format.sample_rate);
    println!("  bits per sample: {}", report.format.bits_per_sample);
    println!("  block align:     {} bytes", report.block_align);
    println!("  byte rate:       {} bytes/s", report.bytes_per_sec);
    println!("  data size:       {} bytes", report.data_chunk_size);
    println!("  frames:          {}", report.sample_count);
    println!("  duration:        {:.3}s", report.duration_seconds);

    Ok(ExitCode::SUCCESS)
}
