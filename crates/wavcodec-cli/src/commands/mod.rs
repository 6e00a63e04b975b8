//! CLI command implementations

pub mod copy;
pub mod dump;
pub mod info;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use wavcodec::WavReader;

/// Opens `path` and decodes its header.
pub(crate) fn open_reader(path: &Path) -> Result<WavReader<BufReader<File>>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    WavReader::new(BufReader::new(file))
        .with_context(|| format!("Failed to read WAVE header from {}", path.display()))
}
