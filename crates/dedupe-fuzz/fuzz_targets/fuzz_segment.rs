#![no_main]
use libfuzzer_sys::fuzz_target;

use dedupe_core::{Segmenter, SegmenterConfig};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let window = 2 + (data[0] as u64 % 62);
    let zero_bits = 1 + (data[1] as u32 % 20);
    let body = &data[2..];

    let config = SegmenterConfig::from_zero_bits(window, zero_bits);
    let segmenter = Segmenter::new(config).unwrap();

    let mut joined = Vec::with_capacity(body.len());
    let mut cursor = std::io::Cursor::new(body);
    segmenter
        .run(&mut cursor, |segment| {
            joined.extend_from_slice(segment);
            Ok(())
        })
        .unwrap();
    assert_eq!(joined, body);
});
