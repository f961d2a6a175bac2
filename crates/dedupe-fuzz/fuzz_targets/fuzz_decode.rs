#![no_main]
use libfuzzer_sys::fuzz_target;

use dedupe_codec::DecodeSession;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes are never assumed to be a well-formed message stream;
    // decoding must only ever return Ok or a CodecError, never panic.
    let mut out = Vec::new();
    let mut session = DecodeSession::new(std::io::Cursor::new(data));
    let _ = session.decode_to(&mut out);
});
