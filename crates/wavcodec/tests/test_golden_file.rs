//! Tests against a 400-byte reference file: 89 frames of a stereo 16-bit
//! square wave at 44.1 kHz with an amplitude of roughly 0.7.

use pretty_assertions::assert_eq;
use wavcodec::{Header, WavError, WavFormat, WavReader, WavWriter};

const SQUARE_WAVE: &[u8] = include_bytes!("fixtures/square_stereo_16bit.wav");

const FRAMES: u32 = 89;
const CHANNELS: u16 = 2;
const BITS_PER_SAMPLE: u16 = 16;
const SAMPLE_RATE: u32 = 44100;

fn read_all(bytes: &[u8]) -> Vec<Vec<i64>> {
    let mut reader = WavReader::new(bytes).unwrap();
    (0..reader.sample_count())
        .map(|_| reader.read_int().unwrap())
        .collect()
}

// =============================================================================
// Header
// =============================================================================

#[test]
fn test_golden_header_fields() {
    assert_eq!(SQUARE_WAVE.len(), 400);

    let reader = WavReader::new(SQUARE_WAVE).unwrap();
    assert_eq!(reader.sample_count(), FRAMES);
    assert_eq!(reader.channels(), CHANNELS);
    assert_eq!(reader.bits_per_sample(), BITS_PER_SAMPLE);
    assert_eq!(reader.sample_rate(), SAMPLE_RATE);

    let header = reader.header();
    assert_eq!(header.data_chunk_size, 356);
    assert_eq!(header.data_size, 392);
    assert_eq!(header.block_align, 4);
    assert_eq!(header.bytes_per_sec, 176400);
}

#[test]
fn test_golden_header_matches_built_header() {
    let built = Header::pcm(CHANNELS, SAMPLE_RATE, BITS_PER_SAMPLE, FRAMES);
    assert_eq!(&built.to_bytes()[..], &SQUARE_WAVE[..Header::SIZE]);
}

// =============================================================================
// Frames
// =============================================================================

#[test]
fn test_golden_first_frames() {
    let frames = read_all(SQUARE_WAVE);
    assert_eq!(frames.len(), FRAMES as usize);
    assert_eq!(frames[0], vec![0, -1]);
    assert_eq!(frames[1], vec![18722, 18724]);
    assert_eq!(frames[FRAMES as usize - 1], vec![27, 7]);
}

#[test]
fn test_golden_square_wave_amplitude() {
    let frames = read_all(SQUARE_WAVE);

    let near_amplitude = frames
        .iter()
        .filter(|frame| {
            let norm = (frame[0] as f64 / 32768.0).abs();
            norm > 0.65 && norm < 0.75
        })
        .count();

    let ratio = near_amplitude as f64 / frames.len() as f64;
    assert!(ratio >= 0.9, "expected >= 90% of samples near 0.7, got {ratio}");
}

#[test]
fn test_golden_read_past_end() {
    let mut reader = WavReader::new(SQUARE_WAVE).unwrap();
    for _ in 0..reader.sample_count() {
        reader.read_int().unwrap();
    }
    assert!(matches!(reader.read_int(), Err(WavError::TruncatedStream)));
}

#[test]
fn test_golden_read_float_unsupported() {
    let mut reader = WavReader::new(SQUARE_WAVE).unwrap();
    assert!(matches!(
        reader.read_float(),
        Err(WavError::UnsupportedEncoding { .. })
    ));
    assert_eq!(reader.read_int().unwrap(), vec![0, -1]);
}

// =============================================================================
// Rewrite
// =============================================================================

#[test]
fn test_golden_rewrite_is_byte_exact() {
    let frames = read_all(SQUARE_WAVE);

    let format = WavFormat::new(CHANNELS, SAMPLE_RATE, BITS_PER_SAMPLE);
    let mut writer = WavWriter::new(Vec::new(), format, FRAMES).unwrap();
    for frame in &frames {
        writer.write_int(frame).unwrap();
    }
    assert_eq!(writer.frames_written(), FRAMES);

    assert!(matches!(
        writer.write_int(&[0, 0]),
        Err(WavError::FrameBudgetExceeded { frame_count: FRAMES })
    ));

    assert_eq!(writer.into_inner(), SQUARE_WAVE.to_vec());
}

#[test]
fn test_golden_truncated_file() {
    let truncated = &SQUARE_WAVE[..SQUARE_WAVE.len() - 2];
    let mut reader = WavReader::new(truncated).unwrap();
    for _ in 0..FRAMES - 1 {
        reader.read_int().unwrap();
    }
    assert!(matches!(reader.read_int(), Err(WavError::TruncatedStream)));
}
