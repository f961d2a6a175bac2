//! Segmenter throughput over a synthetic byte stream.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use dedupe_core::{Segmenter, SegmenterConfig};

fn synthetic_data(len: usize) -> Vec<u8> {
    let mut seed = 0x9E3779B97F4A7C15u64;
    (0..len)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            (seed & 0xff) as u8
        })
        .collect()
}

fn bench_segmenter(c: &mut Criterion) {
    let data = synthetic_data(1 << 22);
    let mut group = c.benchmark_group("segmenter");
    group.throughput(Throughput::Bytes(data.len() as u64));

    for &zero_bits in &[12u32, 16, 20] {
        group.bench_with_input(
            BenchmarkId::new("zero_bits", zero_bits),
            &zero_bits,
            |b, &zb| {
                let config = SegmenterConfig::from_zero_bits(64, zb);
                let segmenter = Segmenter::new(config).unwrap();
                b.iter(|| {
                    let mut count = 0usize;
                    let mut cursor = std::io::Cursor::new(&data[..]);
                    segmenter
                        .run(&mut cursor, |s| {
                            count += s.len();
                            Ok(())
                        })
                        .unwrap();
                    black_box(count);
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_segmenter);
criterion_main!(benches);
