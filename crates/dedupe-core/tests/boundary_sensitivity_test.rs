//! Integration test: local-change property of content-defined chunking.
//!
//! Two inputs differing by one byte should agree on every segment that
//! ends a full window's worth of bytes before the differing position —
//! the whole point of content-defined (rather than fixed-size) chunking.

use dedupe_core::{Segmenter, SegmenterConfig};

fn segment_all(data: &[u8], window: u64, zero_bits: u32) -> Vec<Vec<u8>> {
    let cfg = SegmenterConfig::from_zero_bits(window, zero_bits);
    let seg = Segmenter::new(cfg).unwrap();
    let mut out = Vec::new();
    let mut cursor = std::io::Cursor::new(data);
    seg.run(&mut cursor, |s| {
        out.push(s.to_vec());
        Ok(())
    })
    .unwrap();
    out
}

#[test]
fn single_byte_change_only_perturbs_nearby_segments() {
    let window = 48u64;
    let zero_bits = 11u32;

    let mut base = Vec::new();
    for i in 0u32..60_000 {
        base.push((i.wrapping_mul(2654435761) % 256) as u8);
    }

    let change_at = base.len() / 2;
    let mut changed = base.clone();
    changed[change_at] ^= 0xFF;

    let segs_base = segment_all(&base, window, zero_bits);
    let segs_changed = segment_all(&changed, window, zero_bits);

    // Walk both segment lists, accumulating consumed byte offsets; segments
    // that end strictly before `change_at - window` must be byte-identical
    // across the two runs since the rolling hash at their cut point never
    // observed the differing byte.
    let mut offset_base = 0usize;
    let mut offset_changed = 0usize;
    let safe_boundary = change_at.saturating_sub(window as usize);

    let mut i = 0;
    let mut j = 0;
    while i < segs_base.len() && j < segs_changed.len() {
        let end_base = offset_base + segs_base[i].len();
        let end_changed = offset_changed + segs_changed[j].len();
        if end_base > safe_boundary || end_changed > safe_boundary {
            break;
        }
        assert_eq!(
            segs_base[i], segs_changed[j],
            "segment before the safe boundary diverged"
        );
        offset_base = end_base;
        offset_changed = end_changed;
        i += 1;
        j += 1;
    }

    // Sanity: we actually compared at least one segment, and the safe
    // boundary was reached before the change point.
    assert!(i > 0, "expected at least one stable leading segment");
}

#[test]
fn coverage_and_bounds_hold_on_realistic_random_stream() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut data = Vec::new();
    let mut seed: u64 = 0x1234_5678_9abc_def0;
    for _ in 0..250_000u32 {
        let mut hasher = DefaultHasher::new();
        seed.hash(&mut hasher);
        seed = hasher.finish();
        data.push((seed & 0xff) as u8);
    }

    let window = 64u64;
    let zero_bits = 12u32;
    let cfg = SegmenterConfig::from_zero_bits(window, zero_bits);
    let max_len = cfg.max_segment_length.unwrap_or((cfg.mask + 1) * 8);

    let segs = segment_all(&data, window, zero_bits);
    let joined: Vec<u8> = segs.iter().flatten().copied().collect();
    assert_eq!(joined, data);

    for (idx, s) in segs.iter().enumerate() {
        assert!(s.len() as u64 <= max_len);
        if idx + 1 != segs.len() {
            assert!(s.len() as u64 >= window);
        }
    }
}
