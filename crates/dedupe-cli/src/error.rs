//! Top-level CLI error type: configuration, codec, and I/O failures all
//! surface here with `#[from]` conversions so `?` composes across crate
//! boundaries, matching the idiom used throughout the teacher's harness.

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Codec(#[from] dedupe_codec::CodecError),

    #[error(transparent)]
    Segment(#[from] dedupe_core::SegmenterError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize stats: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Classifies this error into the diagnostic stage that raised it, so
    /// structured diagnostics can identify the failing stage rather than
    /// just the overall encode/decode operation. Digest computation and
    /// tracker bookkeeping are infallible in this design, so no variant
    /// maps to those stages.
    pub fn stage(&self) -> &'static str {
        use dedupe_codec::CodecError;

        match self {
            CliError::Config(_) => "config",
            CliError::Segment(_) => "segment",
            CliError::Io(_) => "io",
            CliError::Json(_) => "stats",
            CliError::Codec(CodecError::Segment(_)) => "segment",
            CliError::Codec(CodecError::Decode(_)) => "protocol-read",
            CliError::Codec(CodecError::Encode(_)) => "protocol-write",
            CliError::Codec(
                CodecError::UnknownMessageType(_)
                | CodecError::DuplicateDefine(_)
                | CodecError::UnknownReference(_),
            ) => "decode-table",
            CliError::Codec(CodecError::Io(_)) => "io",
        }
    }
}
