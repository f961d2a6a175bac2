//! Segment-length distribution statistics, reusing `SegmentRecord` directly
//! rather than keeping separate bookkeeping.

use dedupe_codec::SegmentTracker;
use serde::Serialize;

#[derive(Debug, Default)]
pub struct ParseStats {
    lengths: Vec<(u64, u64)>, // (length, freq) per distinct segment
}

impl ParseStats {
    pub fn from_tracker(tracker: &SegmentTracker) -> Self {
        let lengths = tracker
            .records()
            .map(|(_, record)| (record.length, record.freq))
            .collect();
        Self { lengths }
    }

    pub fn report(&self) -> StatsReport {
        let mut weighted: Vec<f64> = Vec::new();
        for &(length, freq) in &self.lengths {
            weighted.extend(std::iter::repeat(length as f64).take(freq as usize));
        }
        weighted.sort_by(|a, b| a.total_cmp(b));

        let num_segments = weighted.len();
        let (mean, median, min, max) = if num_segments == 0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let sum: f64 = weighted.iter().sum();
            let mean = sum / num_segments as f64;
            let median = if num_segments % 2 == 1 {
                weighted[num_segments / 2]
            } else {
                (weighted[num_segments / 2 - 1] + weighted[num_segments / 2]) / 2.0
            };
            (mean, median, weighted[0], weighted[num_segments - 1])
        };

        let mut dup_segment_count = 0u64;
        let mut dup_bytes = 0u64;
        let mut unique_bytes = 0u64;
        let mut max_segment_freq = 0u64;
        for &(length, freq) in &self.lengths {
            if freq > 1 {
                dup_segment_count += freq - 1;
                dup_bytes += length * (freq - 1);
            }
            unique_bytes += length;
            max_segment_freq = max_segment_freq.max(freq);
        }

        StatsReport {
            distinct_segments: self.lengths.len(),
            total_segments: num_segments,
            mean_segment_length: mean,
            median_segment_length: median,
            min_segment_length: min,
            max_segment_length: max,
            dup_segment_count,
            dup_bytes,
            unique_bytes,
            max_segment_freq,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub distinct_segments: usize,
    pub total_segments: usize,
    pub mean_segment_length: f64,
    pub median_segment_length: f64,
    pub min_segment_length: f64,
    pub max_segment_length: f64,
    pub dup_segment_count: u64,
    pub dup_bytes: u64,
    pub unique_bytes: u64,
    pub max_segment_freq: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use dedupe_codec::{EncodeSession, SegmenterConfig};

    #[test]
    fn repeated_block_shows_up_as_duplicate_bytes() {
        let config = SegmenterConfig::from_zero_bits(64, 12);
        let block = vec![3u8; 5000];
        let mut data = Vec::new();
        for _ in 0..4 {
            data.extend_from_slice(&block);
        }
        let mut sink = Vec::new();
        let mut session = EncodeSession::new(config, &mut sink).unwrap();
        session.encode(&mut std::io::Cursor::new(data)).unwrap();
        let tracker = session.into_tracker();

        let report = ParseStats::from_tracker(&tracker).report();
        assert!(report.dup_segment_count > 0);
        assert!(report.dup_bytes > 0);
        assert!(report.max_segment_freq >= 2);
    }

    #[test]
    fn empty_tracker_reports_zeros_without_panicking() {
        let tracker = dedupe_codec::SegmentTracker::new();
        let report = ParseStats::from_tracker(&tracker).report();
        assert_eq!(report.total_segments, 0);
        assert_eq!(report.mean_segment_length, 0.0);
    }
}
