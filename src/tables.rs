//! Permutation tables for the script encoding
//!
//! The encoder rotates each codeable character through one of three
//! alphabets. `TRIPLETS[c]` lists the plaintext candidates for encoded code
//! point `c`; `PERM_INDEX[n % 64]` selects the candidate for the `n`-th
//! codeable character of the stream.
//!
//! Entries for 0x0A, 0x0D, '<' and '>' are never reached by the decoder.

/// Number of entries in the triplet table (one per 7-bit code point)
pub const TRIPLET_COUNT: usize = 0x80;

/// Period of the candidate selector
pub const PERM_INDEX_LEN: usize = 0x40;

/// Candidate characters, indexed by encoded code point
#[rustfmt::skip]
pub static TRIPLETS: [[u8; 3]; TRIPLET_COUNT] = [
    [0x00, 0x00, 0x00], [0x01, 0x01, 0x01], [0x02, 0x02, 0x02], [0x03, 0x03, 0x03],
    [0x04, 0x04, 0x04], [0x05, 0x05, 0x05], [0x06, 0x06, 0x06], [0x07, 0x07, 0x07],
    [0x08, 0x08, 0x08], [0x57, 0x6E, 0x7B], [0x4A, 0x4C, 0x41], [0x0B, 0x0B, 0x0B],
    [0x0C, 0x0C, 0x0C], [0x4A, 0x4C, 0x41], [0x0E, 0x0E, 0x0E], [0x0F, 0x0F, 0x0F],
    [0x10, 0x10, 0x10], [0x11, 0x11, 0x11], [0x12, 0x12, 0x12], [0x13, 0x13, 0x13],
    [0x14, 0x14, 0x14], [0x15, 0x15, 0x15], [0x16, 0x16, 0x16], [0x17, 0x17, 0x17],
    [0x18, 0x18, 0x18], [0x19, 0x19, 0x19], [0x1A, 0x1A, 0x1A], [0x1B, 0x1B, 0x1B],
    [0x1C, 0x1C, 0x1C], [0x1D, 0x1D, 0x1D], [0x1E, 0x1E, 0x1E], [0x1F, 0x1F, 0x1F],
    [0x2E, 0x2D, 0x32], [0x47, 0x75, 0x30], [0x7A, 0x52, 0x21], [0x56, 0x60, 0x29],
    [0x42, 0x71, 0x5B], [0x6A, 0x5E, 0x38], [0x2F, 0x49, 0x33], [0x26, 0x5C, 0x3D],
    [0x49, 0x62, 0x58], [0x41, 0x7D, 0x3A], [0x34, 0x29, 0x35], [0x32, 0x36, 0x65],
    [0x5B, 0x20, 0x39], [0x76, 0x7C, 0x5C], [0x72, 0x7A, 0x56], [0x43, 0x7F, 0x73],
    [0x38, 0x6B, 0x66], [0x39, 0x63, 0x4E], [0x70, 0x33, 0x45], [0x45, 0x2B, 0x6B],
    [0x68, 0x68, 0x62], [0x71, 0x51, 0x59], [0x4F, 0x66, 0x78], [0x09, 0x76, 0x5E],
    [0x62, 0x31, 0x7D], [0x44, 0x64, 0x4A], [0x23, 0x54, 0x6D], [0x75, 0x43, 0x71],
    [0x4A, 0x4C, 0x41], [0x7E, 0x3A, 0x60], [0x4A, 0x4C, 0x41], [0x5E, 0x7E, 0x53],
    [0x40, 0x4C, 0x40], [0x77, 0x45, 0x42], [0x4A, 0x2C, 0x27], [0x61, 0x2A, 0x48],
    [0x5D, 0x74, 0x72], [0x22, 0x27, 0x75], [0x4B, 0x37, 0x31], [0x6F, 0x44, 0x37],
    [0x4E, 0x79, 0x4D], [0x3B, 0x59, 0x52], [0x4C, 0x2F, 0x22], [0x50, 0x6F, 0x54],
    [0x67, 0x26, 0x6A], [0x2A, 0x72, 0x47], [0x7D, 0x6A, 0x64], [0x74, 0x39, 0x2D],
    [0x54, 0x7B, 0x20], [0x2B, 0x3F, 0x7F], [0x2D, 0x38, 0x2E], [0x2C, 0x77, 0x4C],
    [0x30, 0x67, 0x5D], [0x6E, 0x53, 0x7E], [0x6B, 0x47, 0x6C], [0x66, 0x34, 0x6F],
    [0x35, 0x78, 0x79], [0x25, 0x5D, 0x74], [0x21, 0x30, 0x43], [0x64, 0x23, 0x26],
    [0x4D, 0x5A, 0x76], [0x52, 0x5B, 0x25], [0x63, 0x6C, 0x24], [0x3F, 0x48, 0x2B],
    [0x7B, 0x55, 0x28], [0x78, 0x70, 0x23], [0x29, 0x69, 0x41], [0x28, 0x2E, 0x34],
    [0x73, 0x4C, 0x09], [0x59, 0x21, 0x2A], [0x33, 0x24, 0x44], [0x7F, 0x4E, 0x3F],
    [0x6D, 0x50, 0x77], [0x55, 0x09, 0x3B], [0x53, 0x56, 0x55], [0x7C, 0x73, 0x69],
    [0x3A, 0x35, 0x61], [0x5F, 0x61, 0x63], [0x65, 0x4B, 0x50], [0x46, 0x58, 0x67],
    [0x58, 0x3B, 0x51], [0x31, 0x57, 0x49], [0x69, 0x22, 0x4F], [0x6C, 0x6D, 0x46],
    [0x5A, 0x4D, 0x68], [0x48, 0x25, 0x7C], [0x27, 0x28, 0x36], [0x5C, 0x46, 0x70],
    [0x3D, 0x4A, 0x6E], [0x24, 0x32, 0x7A], [0x79, 0x41, 0x2F], [0x37, 0x3D, 0x5F],
    [0x60, 0x5F, 0x4B], [0x51, 0x4F, 0x5A], [0x20, 0x42, 0x2C], [0x36, 0x65, 0x57],
];

/// Candidate selector, indexed by codeable-character count modulo 64
#[rustfmt::skip]
pub static PERM_INDEX: [u8; PERM_INDEX_LEN] = [
    0, 1, 2, 0, 1, 2, 1, 2, 2, 1, 2, 1, 0, 2, 1, 2,
    0, 2, 1, 2, 0, 0, 1, 2, 2, 1, 0, 2, 1, 2, 2, 1,
    0, 0, 2, 1, 2, 1, 2, 0, 2, 0, 0, 1, 2, 0, 2, 1,
    0, 2, 1, 2, 0, 0, 1, 2, 2, 0, 0, 1, 2, 0, 2, 1,
];

/// Look up the plaintext candidate for `code` at codeable count `counter`.
///
/// Both indices are reduced modulo their table length.
#[inline]
pub fn lookup(code: u32, counter: usize) -> char {
    let triplet = &TRIPLETS[code as usize % TRIPLET_COUNT];
    let slot = PERM_INDEX[counter % PERM_INDEX_LEN] as usize;
    char::from(triplet[slot])
}
