//! Big-endian packing of a UUID's two 64-bit words.
//!
//! The buffer layout is fixed: bytes `0..8` hold `high` most-significant byte
//! first, bytes `8..16` hold `low` in the same order. [`unpack`] mirrors
//! [`pack`] exactly.

/// Number of bytes in one word.
pub const BYTES_PER_WORD: usize = core::mem::size_of::<u64>();

/// Number of bytes in a packed UUID.
pub const UUID_BYTES: usize = BYTES_PER_WORD * 2;

/// A packed UUID, always exactly [`UUID_BYTES`] long.
pub type UuidBytes = [u8; UUID_BYTES];

/// Packs `high` and `low` into a 16-byte big-endian buffer.
#[inline]
pub fn pack(high: i64, low: i64) -> UuidBytes {
    let mut bytes = [0_u8; UUID_BYTES];
    let (hi, lo) = bytes.split_at_mut(BYTES_PER_WORD);
    hi.copy_from_slice(&high.to_be_bytes());
    lo.copy_from_slice(&low.to_be_bytes());
    bytes
}

/// Reassembles `(high, low)` from a buffer produced by [`pack`].
#[inline]
pub fn unpack(bytes: &UuidBytes) -> (i64, i64) {
    let (hi, lo) = bytes.split_at(BYTES_PER_WORD);
    (word(hi), word(lo))
}

/// Folds 8 bytes into a word, most-significant byte first.
///
/// Every byte is widened as an unsigned value before it is shifted in, so a
/// byte in `0x80..=0xFF` never smears ones into the high bits.
#[inline]
#[allow(clippy::cast_possible_wrap)]
fn word(bytes: &[u8]) -> i64 {
    bytes
        .iter()
        .fold(0_u64, |acc, &b| (acc << 8) | u64::from(b)) as i64
}
