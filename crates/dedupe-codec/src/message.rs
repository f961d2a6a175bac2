//! Wire message type: DEFINE and REFERENCE records.
//!
//! The wire layout is a flat four-field record (`kind`, `ref_id`, `def_id`,
//! `def_bytes`) matching the original protocol this system was distilled
//! from one-to-one; [`Message`] is the ergonomic, kind-safe API on top of
//! it.

use serde::{Deserialize, Serialize};

/// Discriminant for a REFERENCE record.
pub const KIND_REFERENCE: u16 = 1;
/// Discriminant for a DEFINE record.
pub const KIND_DEFINE: u16 = 2;

/// The raw four-field record that goes on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct WireRecord {
    pub kind: u16,
    pub ref_id: u64,
    pub def_id: u64,
    pub def_bytes: Vec<u8>,
}

/// A protocol message: either declares a new segment (`Define`) or reuses a
/// previously declared one (`Reference`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Reuses a previously DEFINEd segment by id.
    Reference { ref_id: u64 },
    /// Declares `def_id ↦ payload`. Always followed by a `Reference` to the
    /// same id from the encoder driver (see `dedupe-codec::encoder`).
    Define { def_id: u64, payload: Vec<u8> },
}

impl From<Message> for WireRecord {
    fn from(msg: Message) -> Self {
        match msg {
            Message::Reference { ref_id } => WireRecord {
                kind: KIND_REFERENCE,
                ref_id,
                def_id: 0,
                def_bytes: Vec::new(),
            },
            Message::Define { def_id, payload } => WireRecord {
                kind: KIND_DEFINE,
                ref_id: 0,
                def_id,
                def_bytes: payload,
            },
        }
    }
}

impl TryFrom<WireRecord> for Message {
    type Error = crate::error::CodecError;

    fn try_from(record: WireRecord) -> Result<Self, Self::Error> {
        match record.kind {
            KIND_REFERENCE => Ok(Message::Reference {
                ref_id: record.ref_id,
            }),
            KIND_DEFINE => Ok(Message::Define {
                def_id: record.def_id,
                payload: record.def_bytes,
            }),
            other => Err(crate::error::CodecError::UnknownMessageType(other)),
        }
    }
}
