//! Streaming, single-pass content-defined segmentation.
//!
//! Partitions a byte stream into segments at cut points where the rolling
//! hash's low bits are all zero, subject to a minimum length `window_size`
//! and a maximum length `max_segment_length`. See the crate-level docs for
//! the exact algorithm; this module is a direct translation of that
//! algorithm with no behavioral slack.

use std::io::Read;

use crate::buzhash::RollingHash;

/// A boxed handler error, so the segmenter stays generic over whatever the
/// caller's pipeline stage can fail with.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum SegmenterError {
    #[error("window size must be >= 2, got {0}")]
    InvalidWindow(u64),
    #[error("mask must be nonzero")]
    InvalidMask,
    #[error("I/O error while segmenting: {0}")]
    Io(#[from] std::io::Error),
    #[error("segment handler failed: {0}")]
    Handler(#[source] HandlerError),
}

/// Configuration for a [`Segmenter`].
#[derive(Debug, Clone, Copy)]
pub struct SegmenterConfig {
    /// Rolling-hash window size (and minimum segment length). Must be >= 2.
    pub window_size: u64,
    /// Cut-point mask; a cut fires when `hash & mask == 0`. Must be nonzero.
    pub mask: u64,
    /// Maximum segment length. Defaults to `(mask + 1) * 8` when `None`.
    pub max_segment_length: Option<u64>,
}

impl SegmenterConfig {
    /// Builds a config from `zero_bits` the way the CLI's `--zerobits` flag
    /// does: `mask = (1 << zero_bits) - 1`.
    pub fn from_zero_bits(window_size: u64, zero_bits: u32) -> Self {
        Self {
            window_size,
            mask: (1u64 << zero_bits) - 1,
            max_segment_length: None,
        }
    }

    fn resolved_max_segment_length(&self) -> u64 {
        self.max_segment_length
            .unwrap_or_else(|| (self.mask + 1).saturating_mul(8))
    }
}

/// Streams an input source once, cutting it into content-defined segments
/// and invoking a handler exactly once per segment, in stream order.
pub struct Segmenter {
    window_size: u64,
    mask: u64,
    max_segment_length: u64,
}

impl Segmenter {
    /// Validates `config` and builds a `Segmenter`. Returns a setup error
    /// before any I/O occurs if `window_size < 2` or `mask == 0`.
    pub fn new(config: SegmenterConfig) -> Result<Self, SegmenterError> {
        if config.window_size < 2 {
            return Err(SegmenterError::InvalidWindow(config.window_size));
        }
        if config.mask == 0 {
            return Err(SegmenterError::InvalidMask);
        }
        Ok(Self {
            window_size: config.window_size,
            mask: config.mask,
            max_segment_length: config.resolved_max_segment_length(),
        })
    }

    /// Runs the segmenter over `input`, calling `handler` with each
    /// segment's bytes in order. Concatenating the slices handler observes
    /// reproduces `input` exactly.
    pub fn run<R, F>(&self, input: &mut R, mut handler: F) -> Result<(), SegmenterError>
    where
        R: Read,
        F: FnMut(&[u8]) -> Result<(), HandlerError>,
    {
        let mut reader = std::io::BufReader::new(input);
        let mut roller = RollingHash::new(self.window_size as usize);
        let mut cur: Vec<u8> = Vec::with_capacity(self.max_segment_length as usize);
        let mut byte = [0u8; 1];

        loop {
            let n = reader.read(&mut byte)?;
            if n == 0 {
                break;
            }
            let b = byte[0];
            cur.push(b);
            let h = roller.push(b);

            if (cur.len() as u64) < self.window_size {
                continue;
            }

            if (h as u64 & self.mask) == 0 {
                handler(&cur).map_err(SegmenterError::Handler)?;
                cur.clear();
            } else if cur.len() as u64 >= self.max_segment_length {
                handler(&cur).map_err(SegmenterError::Handler)?;
                cur.clear();
            }
        }

        if !cur.is_empty() {
            handler(&cur).map_err(SegmenterError::Handler)?;
        }

        Ok(())
    }
}
