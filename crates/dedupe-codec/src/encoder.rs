//! Encoder driver: segmenter → digest → tracker → protocol writer.

use std::io::{Read, Write};

use dedupe_core::{
    HandlerError, Segmenter, SegmenterConfig, SegmenterError, SegmentTracker, strong_digest,
};

use crate::error::CodecError;
use crate::framing::MessageWriter;
use crate::message::Message;

/// One encode session: owns the tracker and the protocol writer for a
/// single input-stream-to-output-stream pass.
///
/// On any error from the segmenter, digest, tracker, or writer, encoding
/// aborts and the error surfaces to the caller; output is flushed only on
/// success.
pub struct EncodeSession<W: Write> {
    config: SegmenterConfig,
    tracker: SegmentTracker,
    writer: MessageWriter<W>,
}

impl<W: Write> EncodeSession<W> {
    /// Starts a session with a fresh tracker.
    pub fn new(config: SegmenterConfig, output: W) -> Result<Self, CodecError> {
        Self::with_tracker(config, SegmentTracker::new(), output)
    }

    /// Starts a session whose tracker is already primed (used by the
    /// patch/diff driver to share one tracker across two passes).
    pub fn with_tracker(
        config: SegmenterConfig,
        tracker: SegmentTracker,
        output: W,
    ) -> Result<Self, CodecError> {
        Segmenter::new(config)?; // validate eagerly, before any I/O
        Ok(Self {
            config,
            tracker,
            writer: MessageWriter::new(output),
        })
    }

    /// Streams `input` through the segmenter, emitting DEFINE/REFERENCE
    /// messages for each segment, then flushes the output.
    pub fn encode<R: Read>(&mut self, input: &mut R) -> Result<(), CodecError> {
        let segmenter = Segmenter::new(self.config)?;
        let tracker = &mut self.tracker;
        let writer = &mut self.writer;

        let result = segmenter.run(input, |segment| {
            handle_segment(tracker, writer, segment).map_err(|e| Box::new(e) as HandlerError)
        });

        match result {
            Ok(()) => {
                self.writer.flush()?;
                Ok(())
            }
            Err(SegmenterError::Handler(boxed)) => match boxed.downcast::<CodecError>() {
                Ok(err) => Err(*err),
                Err(_) => Err(CodecError::Io(std::io::Error::other(
                    "segment handler failed with an unexpected error type",
                ))),
            },
            Err(other) => Err(CodecError::Segment(other)),
        }
    }

    /// Consumes the session, returning its tracker (for a caller that wants
    /// to continue priming a second pass, e.g. the patch driver).
    pub fn into_tracker(self) -> SegmentTracker {
        self.tracker
    }
}

fn handle_segment<W: Write>(
    tracker: &mut SegmentTracker,
    writer: &mut MessageWriter<W>,
    segment: &[u8],
) -> Result<(), CodecError> {
    let digest = strong_digest(segment);
    let record = tracker.track(digest, segment.len() as u64);
    if record.freq == 1 {
        writer.write(&Message::Define {
            def_id: record.id,
            payload: segment.to_vec(),
        })?;
    }
    writer.write(&Message::Reference { ref_id: record.id })?;
    Ok(())
}

/// Runs the segmenter/digest/tracker stages over `input` without writing
/// any messages, discarding the emitted bytes but keeping `tracker`'s
/// id/digest assignments. Used by the patch driver to prime a shared
/// tracker from the "old" file before encoding the "new" file.
pub fn prime_tracker<R: Read>(
    config: SegmenterConfig,
    tracker: &mut SegmentTracker,
    input: &mut R,
) -> Result<(), CodecError> {
    let segmenter = Segmenter::new(config)?;
    segmenter
        .run(input, |segment| {
            let digest = strong_digest(segment);
            tracker.track(digest, segment.len() as u64);
            Ok(())
        })
        .map_err(CodecError::Segment)
}
