//! Rolling fingerprint over the last `W` bytes of a stream (Buzhash).
//!
//! O(1) per byte, no heap allocation once constructed. The table below is a
//! fixed pseudo-random permutation-like mapping from byte value to a 32-bit
//! constant; any stable table works as long as the encoder is internally
//! self-consistent (the decoder never rehashes, see the crate docs).

/// 256-entry table used to fold each input byte into the rolling hash.
const TABLE: [u32; 256] = [
    0x3AEA679B, 0x509731A9, 0xE1E35A13, 0xFAFDDA02, 0xF180E1E9, 0x02A3D31D,
    0xDE473760, 0x03AD2E74, 0xE742E4C4, 0xABCA51B1, 0xE48E7F7E, 0xA9EA1621,
    0x481796F7, 0x0C18A551, 0xE9E0786D, 0x63E12DAE, 0xB99EB0BB, 0xC4A4E3E9,
    0xCD1B29CB, 0xDA49DEA7, 0x23C8D1E6, 0x1A88AFD2, 0x39C21743, 0x2AFCEF30,
    0xDF0EFE6E, 0xAFE135F4, 0xA030F093, 0x7CEB6678, 0xB9C1B3F5, 0x0BD4BE79,
    0xC881BF15, 0xEB5F263D, 0x8BF4D190, 0xA562DF0F, 0x95247D06, 0x454E80E7,
    0xE631D484, 0xC355B091, 0x22A93340, 0x052D6D9F, 0x309DE206, 0x1C956DAB,
    0x6DE834E8, 0xBFEED1C7, 0xCBACAFFC, 0xCC581FBA, 0xA1A56A0D, 0x66621419,
    0x93E26264, 0x23991ED3, 0xD6C5E60F, 0x00E95D5D, 0xFFE2B426, 0x078BF112,
    0x979C6630, 0xB75EABDA, 0x771B2305, 0x5D9A5242, 0xBD93227E, 0xF9AD5F0D,
    0xF4250271, 0xFE1A4568, 0xAF7D7ADF, 0xF3D42D2E, 0xB99F29DE, 0x13B4DECF,
    0xC6AE4333, 0xF2ED0982, 0x4869DF0F, 0xF310B9EF, 0x57E77E8F, 0xC7EED1C7,
    0xDCFF2BB2, 0xA0FE7A4A, 0xABB7E164, 0x414FECDD, 0x446AC638, 0x8CEC9DA4,
    0x0CD491EE, 0x843BAC9B, 0x5F4DD296, 0x5D7ECAB3, 0xCA735D7D, 0x98B3005E,
    0xE9CB89BB, 0x42220899, 0xD0077C72, 0xD77ABFC1, 0xE733CC35, 0x2E1DA62A,
    0xDEAE702D, 0x7BF4A0FD, 0x6DDB6C79, 0x35951428, 0xB2EB5C6E, 0x7203B9E9,
    0x4AB2FB18, 0x70D9E770, 0xCE63D8B7, 0xAC262F9D, 0xA517B4C1, 0x670306F1,
    0x8334E4F8, 0x9C8CBAA2, 0xC3AEBD42, 0xE8B48CBD, 0x11D5EE2F, 0x1C0A1AC9,
    0x968E7F17, 0x75175634, 0x444062B3, 0x710F1A6E, 0x3D2B51F4, 0xCF28AEED,
    0x8539D2C7, 0x1109DB97, 0xE430A8AF, 0xA4016006, 0x14CD4B52, 0x398936DB,
    0x193D3876, 0x869C4AC5, 0x440618DB, 0xC20F7D4F, 0x450FDA5D, 0x3978B27D,
    0x2CB0127D, 0x08161B20, 0x4738E94C, 0xA9F0951F, 0xCBF37A15, 0x1329A9ED,
    0xC8148CFD, 0x769F68F2, 0xAE9A109C, 0x4CF65EB4, 0x5EADBBE3, 0x48919C56,
    0x20AAABA7, 0x39AB3979, 0xDBF2B8F7, 0xD3BFF0F2, 0xA68E27E5, 0x4122AA6D,
    0x3DA62657, 0xBE1E7B3F, 0x3A71C1E7, 0xA17F1F47, 0x85326E68, 0xB53ABC70,
    0xC3A339A5, 0x3EB66F9B, 0x3E82F4A9, 0x41A2B916, 0x1E833A8D, 0x0882DA15,
    0x7D0377C8, 0xB8E78B3A, 0x235B1980, 0x5D0141B5, 0x855DF02B, 0xFC43FDB1,
    0x050AD0B4, 0xD6D695DA, 0x7CD86922, 0x432A3BBE, 0xE2843E9C, 0xE5F7FE86,
    0x15CF2205, 0x16259C36, 0x1E456860, 0x565B18BC, 0xB1917D63, 0x78E7ADD1,
    0xD494E119, 0x22EB69AA, 0x82863318, 0x7CBAFBDE, 0xBFAA858A, 0xB2932194,
    0xF758461E, 0x2E875878, 0xDE676B2D, 0x1252BC32, 0xD4BC64AC, 0x01BB4F7D,
    0xCF0CB471, 0xE06C0100, 0xCEE8BD09, 0xF4DB084F, 0xDEF62DBE, 0x5B162660,
    0xBB0646E0, 0x7C94C29C, 0x5FB49A8D, 0x0B0B9184, 0xE75650FD, 0x83E8AC35,
    0xDF6506C2, 0x8D1ABB60, 0x70E3AEA3, 0x5524FB22, 0x197E2A65, 0x09326423,
    0x365E29A6, 0x0409097E, 0xA4637BA4, 0xDB527FE3, 0x59EAA9EB, 0x6F50F84F,
    0x92F90CBB, 0xC685AF89, 0x0D811A92, 0x4BB7A43E, 0x0770856C, 0xF97F4A85,
    0xF17711D4, 0x10283F80, 0x765221E2, 0xC2BB441B, 0xBADC1B3A, 0x6F4114AD,
    0x5666E9E3, 0xE52BD30A, 0x11AAEEBA, 0x6A61096B, 0x4CD25518, 0x0E9FEFE5,
    0x07064258, 0xE57CAE56, 0x1C844C8E, 0x8B0AFCB1, 0x6BBE0BD9, 0x623452B6,
    0xF3366D73, 0x96766163, 0x840CBA22, 0x213F32E1, 0x21C0AC77, 0x148220D6,
    0x8BFCB3A7, 0x5BF622EF, 0x9E68C116, 0x982FA159, 0x884680CE, 0x776BA06F,
    0xD692C686, 0x53BD6AC6, 0xA784BD99, 0x9A1EC936, 0xAC1A3E05, 0x35624211,
    0x9A954727, 0x61AF85B5, 0xAB2665D9, 0x4D52DEE7,
];

#[inline]
fn rotl(x: u32, n: u32) -> u32 {
    x.rotate_left(n % 32)
}

/// Incremental Buzhash over the trailing `window_size` bytes of a stream.
///
/// Holds the last `window_size` bytes in a ring buffer so the byte leaving
/// the window is available in O(1) once the window is full.
pub struct RollingHash {
    window_size: usize,
    ring: Vec<u8>,
    cursor: usize,
    filled: usize,
    hash: u32,
}

impl RollingHash {
    /// Creates a roller over a window of `window_size` bytes. `window_size`
    /// must be >= 1; validation of the `>= 2` floor required by the
    /// segmenter happens at the segmenter layer.
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size,
            ring: vec![0u8; window_size],
            cursor: 0,
            filled: 0,
            hash: 0,
        }
    }

    /// Number of bytes pushed since the window was last full (saturates at
    /// `window_size`).
    pub fn is_full(&self) -> bool {
        self.filled >= self.window_size
    }

    /// Pushes one byte into the window, returning the updated hash.
    pub fn push(&mut self, b: u8) -> u32 {
        if self.filled < self.window_size {
            self.hash = rotl(self.hash, 1) ^ TABLE[b as usize];
            self.ring[self.cursor] = b;
            self.cursor = (self.cursor + 1) % self.window_size;
            self.filled += 1;
        } else {
            let b_out = self.ring[self.cursor];
            self.hash =
                rotl(self.hash, 1) ^ rotl(TABLE[b_out as usize], self.window_size as u32) ^ TABLE[b as usize];
            self.ring[self.cursor] = b;
            self.cursor = (self.cursor + 1) % self.window_size;
        }
        self.hash
    }
}
