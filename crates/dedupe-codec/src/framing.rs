//! Streaming reader/writer for the message protocol.
//!
//! Each message is encoded and decoded as one atomic unit directly against
//! the underlying `Read`/`Write`, mirroring the gob encoder/decoder pair
//! this protocol was distilled from: one `write` call per message on
//! encode, one `read` call per message on decode, no separate length
//! prefix needed because the decoder consumes exactly the bytes the
//! decoding of one record requires.

use std::io::{Read, Write};

use bincode::config::{Configuration, standard};

use crate::error::CodecError;
use crate::message::{Message, WireRecord};

fn config() -> Configuration {
    standard()
}

/// Writes [`Message`]s to an underlying sink, one record per call.
pub struct MessageWriter<W: Write> {
    inner: W,
}

impl<W: Write> MessageWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Encodes and writes one message.
    pub fn write(&mut self, msg: &Message) -> Result<(), CodecError> {
        let record: WireRecord = msg.clone().into();
        bincode::serde::encode_into_std_write(&record, &mut self.inner, config())?;
        Ok(())
    }

    /// Flushes the underlying sink.
    pub fn flush(&mut self) -> Result<(), CodecError> {
        self.inner.flush()?;
        Ok(())
    }

    /// Returns the wrapped writer, consuming self.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Reads [`Message`]s from an underlying source, one record per call.
pub struct MessageReader<R: Read> {
    inner: R,
}

impl<R: Read> MessageReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Reads the next message, or `Ok(None)` on a clean end-of-stream (no
    /// bytes remaining at a message boundary). A truncated or malformed
    /// record surfaces as `Err(CodecError::Decode(..))`.
    pub fn read(&mut self) -> Result<Option<Message>, CodecError> {
        let mut first = [0u8; 1];
        let n = self.inner.read(&mut first)?;
        if n == 0 {
            return Ok(None);
        }

        let mut chained = std::io::Cursor::new(first).chain(&mut self.inner);
        let record: WireRecord = bincode::serde::decode_from_std_read(&mut chained, config())?;
        let msg = Message::try_from(record)?;
        Ok(Some(msg))
    }
}
