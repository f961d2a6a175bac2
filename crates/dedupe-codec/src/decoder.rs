//! Decoder driver: reads messages, maintains an id → payload table, writes
//! reconstructed output bytes.

use std::collections::HashMap;
use std::io::{Read, Write};

use crate::error::CodecError;
use crate::framing::MessageReader;
use crate::message::Message;

/// One decode session: owns the id → payload table for a single encoded
/// stream. All protocol errors (unknown reference, duplicate DEFINE,
/// malformed framing) are fatal — partial reconstruction is meaningless.
pub struct DecodeSession<R: Read> {
    reader: MessageReader<R>,
    table: HashMap<u64, Vec<u8>>,
}

impl<R: Read> DecodeSession<R> {
    /// Starts a session with an empty table.
    pub fn new(input: R) -> Self {
        Self::with_table(input, HashMap::new())
    }

    /// Starts a session whose table is already preseeded (used by
    /// apply-patch to preload the "old" file's segments before consuming a
    /// patch stream).
    pub fn with_table(input: R, table: HashMap<u64, Vec<u8>>) -> Self {
        Self {
            reader: MessageReader::new(input),
            table,
        }
    }

    /// Consumes the entire message stream, writing reconstructed bytes to
    /// `output`. On a clean end-of-stream, the concatenation of all emitted
    /// bytes equals the original input of the matching encode session.
    pub fn decode_to<W: Write>(&mut self, output: &mut W) -> Result<(), CodecError> {
        while let Some(msg) = self.reader.read()? {
            match msg {
                Message::Define { def_id, payload } => {
                    if self.table.contains_key(&def_id) {
                        return Err(CodecError::DuplicateDefine(def_id));
                    }
                    // Do not emit bytes here: the encoder always follows a
                    // DEFINE with an explicit REFERENCE to the same id,
                    // which is what writes the payload to output. Emitting
                    // here too would double the first occurrence.
                    self.table.insert(def_id, payload);
                }
                Message::Reference { ref_id } => {
                    let payload = self
                        .table
                        .get(&ref_id)
                        .ok_or(CodecError::UnknownReference(ref_id))?;
                    output.write_all(payload)?;
                }
            }
        }
        output.flush()?;
        Ok(())
    }

    /// Consumes the session, returning its id → payload table.
    pub fn into_table(self) -> HashMap<u64, Vec<u8>> {
        self.table
    }
}
