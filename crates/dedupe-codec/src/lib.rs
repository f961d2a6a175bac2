//! Length-delimited DEFINE/REFERENCE message protocol, plus the encoder and
//! decoder session drivers built on `dedupe-core`'s segmenter, digest, and
//! tracker.

mod decoder;
mod encoder;
mod error;
mod framing;
mod message;
mod patch;

pub use decoder::DecodeSession;
pub use encoder::{EncodeSession, prime_tracker};
pub use error::CodecError;
pub use framing::{MessageReader, MessageWriter};
pub use message::Message;
pub use patch::{apply_patch, make_patch};

pub use dedupe_core::{SegmenterConfig, SegmenterError, SegmentRecord, SegmentTracker};
