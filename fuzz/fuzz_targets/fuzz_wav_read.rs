#![no_main]

use libfuzzer_sys::fuzz_target;
use wavcodec::{Header, WavReader};

fuzz_target!(|data: &[u8]| {
    if data.len() >= Header::SIZE {
        let mut bytes = [0u8; Header::SIZE];
        bytes.copy_from_slice(&data[..Header::SIZE]);
        let header = Header::from_bytes(&bytes);
        assert_eq!(header.to_bytes(), bytes);
        let _ = header.validate();
        let _ = header.sample_count();
    }

    let Ok(mut reader) = WavReader::new(data) else {
        return;
    };
    for _ in 0..reader.sample_count() {
        let frame = if reader.bits_per_sample() == 32 && data.len() % 2 == 0 {
            reader.read_float().map(|f| f.len())
        } else {
            reader.read_int().map(|f| f.len())
        };
        match frame {
            Ok(len) => assert_eq!(len, usize::from(reader.channels())),
            Err(_) => break,
        }
    }
});
