//! Content-defined chunking primitives: rolling hash, segmenter, strong
//! digest, and the encoder-side segment tracker.
//!
//! This crate is pure computation over byte slices — no wire protocol, no
//! file I/O beyond the generic [`std::io::Read`] the segmenter streams
//! from. See `dedupe-codec` for the message protocol and session drivers
//! built on top of these primitives.

#![deny(unsafe_code)]

mod buzhash;
mod digest;
mod segmenter;
mod tracker;

pub use buzhash::RollingHash;
pub use digest::{DIGEST_SIZE, StrongDigest, strong_digest};
pub use segmenter::{HandlerError, Segmenter, SegmenterConfig, SegmenterError};
pub use tracker::{SegmentRecord, SegmentTracker};
