//! Strong (collision-resistant) content digest used to key segment identity.
//!
//! Digests never appear on the wire; they only key the encoder's
//! [`crate::tracker::SegmentTracker`]. Any collision-resistant, fixed-width
//! function works — SHA-512 is the reference choice here, matching the
//! original implementation this system was distilled from.

use sha2::{Digest, Sha512};

/// Width in bytes of [`StrongDigest`] (SHA-512 output).
pub const DIGEST_SIZE: usize = 64;

/// An opaque, fixed-width content digest. Used directly as a map key: the
/// bytes are never re-hashed, only compared.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrongDigest([u8; DIGEST_SIZE]);

impl StrongDigest {
    /// Returns the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }
}

impl std::fmt::Debug for StrongDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StrongDigest(")?;
        for byte in &self.0[..8] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "..)")
    }
}

/// Computes the strong digest of a segment's bytes.
pub fn strong_digest(segment: &[u8]) -> StrongDigest {
    let mut hasher = Sha512::new();
    hasher.update(segment);
    let out = hasher.finalize();
    let mut bytes = [0u8; DIGEST_SIZE];
    bytes.copy_from_slice(&out);
    StrongDigest(bytes)
}
