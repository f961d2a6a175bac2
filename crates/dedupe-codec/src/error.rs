//! Error taxonomy for the wire protocol and session drivers.

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode message: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("failed to encode message: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("segmentation error: {0}")]
    Segment(#[from] dedupe_core::SegmenterError),

    #[error("unknown message type {0}")]
    UnknownMessageType(u16),

    #[error("duplicate DEFINE for id {0}")]
    DuplicateDefine(u64),

    #[error("reference to unknown id {0}")]
    UnknownReference(u64),
}
