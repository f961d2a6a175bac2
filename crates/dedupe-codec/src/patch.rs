//! Delta synthesis by sharing one tracker across two encode passes.
//!
//! Grounded on the original implementation's `diff.go`/`SigMaker`: the
//! patch/diff driver is not a new codec, it is a direct corollary of the
//! core round-trip and ID-stability invariants. A patch is produced by
//! encoding the "old" file first (discarding its emitted messages, keeping
//! only the tracker's id/digest assignments) and then encoding the "new"
//! file with the same tracker — segments shared with "old" surface only as
//! REFERENCEs.

use std::collections::HashMap;
use std::io::{Read, Write};

use dedupe_core::{SegmenterConfig, SegmentTracker};

use crate::decoder::DecodeSession;
use crate::encoder::{EncodeSession, prime_tracker};
use crate::error::CodecError;

/// Produces a patch stream from `old` to `new`, writing it to `patch_out`.
pub fn make_patch<R1: Read, R2: Read, W: Write>(
    config: SegmenterConfig,
    old: &mut R1,
    new: &mut R2,
    patch_out: W,
) -> Result<(), CodecError> {
    let mut tracker = SegmentTracker::new();
    prime_tracker(config, &mut tracker, old)?;

    let mut session = EncodeSession::with_tracker(config, tracker, patch_out)?;
    session.encode(new)
}

/// Applies a patch produced by [`make_patch`]: preloads a decoder table from
/// `old` (by re-running the segmenter/digest/tracker over it in memory,
/// discarding the bytes) and then consumes `patch_in`, writing the
/// reconstructed "new" file to `output`.
pub fn apply_patch<R1: Read, R2: Read, W: Write>(
    config: SegmenterConfig,
    old: &mut R1,
    patch_in: R2,
    output: &mut W,
) -> Result<(), CodecError> {
    let table = build_table_from_plain(config, old)?;
    let mut session = DecodeSession::with_table(patch_in, table);
    session.decode_to(output)
}

/// Segments `input` and returns the id → payload table that an encode pass
/// over it would have produced, without writing any wire messages.
fn build_table_from_plain<R: Read>(
    config: SegmenterConfig,
    input: &mut R,
) -> Result<HashMap<u64, Vec<u8>>, CodecError> {
    use dedupe_core::{Segmenter, strong_digest};

    let segmenter = Segmenter::new(config)?;
    let mut table = HashMap::new();
    let mut tracker = SegmentTracker::new();
    segmenter
        .run(input, |segment| {
            let digest = strong_digest(segment);
            let record = tracker.track(digest, segment.len() as u64);
            table.entry(record.id).or_insert_with(|| segment.to_vec());
            Ok(())
        })
        .map_err(CodecError::Segment)?;
    Ok(table)
}
