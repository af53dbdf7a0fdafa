use crate::{
    COMPACT32_LEN, COMPACT64_LEN, Error, Result,
    words::{UUID_BYTES, UuidBytes},
};
use data_encoding::{Encoding, Specification};
use std::sync::LazyLock;

const PAD: u8 = b'=';

/// Longest padded encoding of [`UUID_BYTES`] across the supported codecs
/// (base32: 32 characters).
const MAX_PADDED_LEN: usize = 32;

/// A fixed byte-to-text codec configuration paired with its compact length.
///
/// The codec's padded output for 16 bytes always ends in the same run of
/// padding characters, so truncating it to [`Codec::compact_len`] loses nothing:
/// [`Codec::decode`] puts the padding back before handing the text to the
/// codec.
///
/// Decoding ignores the unused bits of the last character, so only a symbol
/// outside the alphabet is rejected.
#[derive(Debug)]
pub struct Codec {
    encoding: LazyLock<Encoding>,
    len: usize,
}

/// URL-safe base64 (`A-Z a-z 0-9 - _`), 22 characters.
pub static BASE64: Codec = Codec {
    encoding: LazyLock::new(|| lenient(&data_encoding::BASE64URL)),
    len: COMPACT64_LEN,
};

/// RFC 4648 base32 (`A-Z 2-7`), 26 characters.
pub static BASE32: Codec = Codec {
    encoding: LazyLock::new(|| lenient(&data_encoding::BASE32)),
    len: COMPACT32_LEN,
};

/// Same alphabet and padding as `canonical`, without the trailing bits check.
fn lenient(canonical: &Encoding) -> Encoding {
    let mut spec: Specification = canonical.specification();
    spec.check_trailing_bits = false;
    // Only the trailing bits flag differs from a predefined, valid encoding.
    spec.encoding()
        .unwrap_or_else(|e| unreachable!("invalid lenient encoding: {e}"))
}

impl Codec {
    /// Length of every compact string produced by this codec.
    pub const fn compact_len(&self) -> usize {
        self.len
    }

    /// Encodes `bytes` and strips the trailing padding.
    pub fn encode(&self, bytes: &UuidBytes) -> String {
        let mut encoded = self.encoding.encode(bytes);
        encoded.truncate(self.len);
        encoded
    }

    /// Decodes a compact string back into 16 bytes.
    ///
    /// The caller is responsible for the length check; shorter input is
    /// rejected by the codec.
    ///
    /// # Errors
    ///
    /// - [`Error::Decode`] if the input contains a character outside the
    ///   alphabet or is too short.
    /// - [`Error::Format`] if the input is longer than the padded encoding or
    ///   the codec produced anything but 16 bytes.
    pub fn decode(&self, compact: &str) -> Result<UuidBytes> {
        let padded_len = self.encoding.encode_len(UUID_BYTES);
        let input = compact.as_bytes();
        if input.len() > padded_len {
            return Err(Error::format(compact));
        }

        let mut buf = [PAD; MAX_PADDED_LEN];
        buf[..input.len()].copy_from_slice(input);
        let padded = &buf[..padded_len];

        let decoded = self
            .encoding
            .decode(padded)
            .map_err(|e| Error::decode(compact, e))?;
        UuidBytes::try_from(decoded.as_slice()).map_err(|_| Error::format(compact))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::pack;

    #[test]
    fn padded_lengths_fit_buffer() {
        for codec in [&BASE64, &BASE32] {
            assert!(codec.encoding.encode_len(UUID_BYTES) <= MAX_PADDED_LEN);
        }
    }

    #[test]
    fn only_padding_is_truncated() {
        let bytes = pack(i64::MAX, -1);
        for codec in [&BASE64, &BASE32] {
            let full = codec.encoding.encode(&bytes);
            let (kept, dropped) = full.split_at(codec.compact_len());
            assert!(dropped.bytes().all(|b| b == PAD), "{full}");
            assert!(kept.bytes().all(|b| b != PAD), "{full}");
        }
    }

    #[test]
    fn known_vectors() {
        let bytes = pack(0x0123_4567_89AB_CDEF, -0x0123_4567_89AB_CDF0);
        assert_eq!(BASE64.encode(&bytes), "ASNFZ4mrze_-3LqYdlQyEA");
        assert_eq!(BASE32.encode(&bytes), "AERUKZ4JVPG677W4XKMHMVBSCA");
    }

    #[test]
    fn decode_reverses_encode() {
        let bytes = pack(-0x5EAD_BEEF, 0x0BAD_F00D);
        for codec in [&BASE64, &BASE32] {
            assert_eq!(codec.decode(&codec.encode(&bytes)), Ok(bytes));
        }
    }

    #[test]
    fn decode_ignores_trailing_bits() {
        let nil = [0_u8; UUID_BYTES];
        assert_eq!(BASE64.decode("AAAAAAAAAAAAAAAAAAAAAB"), Ok(nil));
        assert_eq!(BASE64.decode("AAAAAAAAAAAAAAAAAAAAAP"), Ok(nil));
        assert_eq!(BASE32.decode(&format!("{}D", "A".repeat(25))), Ok(nil));
    }

    #[test]
    fn decode_rejects_foreign_symbol() {
        let err = BASE64.decode("AAAAAAAAAAAAAAAAAAAAA%").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }), "{err:?}");

        // '0', '1', '8' and lower case are outside base32
        for bad in ["0", "1", "8", "a"] {
            let input = format!("{}{bad}", "A".repeat(25));
            let err = BASE32.decode(&input).unwrap_err();
            assert!(matches!(err, Error::Decode { .. }), "{input}: {err:?}");
        }
    }

    #[test]
    fn decode_rejects_oversized_input() {
        let input = "A".repeat(40);
        assert_eq!(BASE32.decode(&input), Err(Error::format(&input)));
    }
}
