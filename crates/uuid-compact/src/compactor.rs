use crate::{
    BASE32, BASE64, Codec, Error, Result,
    words::{pack, unpack},
};
#[cfg(feature = "tracing")]
use tracing::instrument;
use uuid::Uuid;

/// Length of every string produced by the `compact64` functions.
pub const COMPACT64_LEN: usize = 22;

/// Length of every string produced by the `compact32` functions.
pub const COMPACT32_LEN: usize = 26;

/// Converts UUIDs to URL-safe compact strings, and back.
///
/// Canonical UUID strings are 36 characters, e.g.
/// `be177dbe-5639-4ee1-90b1-09e108ffdddc`. The compactor shortens them to
/// either:
///
/// - [`COMPACT64_LEN`] (22) characters of URL-safe base64 (`A-Z a-z 0-9 - _`),
///   or
/// - [`COMPACT32_LEN`] (26) characters of base32 (`A-Z 2-7`). Longer, but
///   upper case only and free of `0`, `1` and `8`, which are easily confused
///   with `O`, `I` and `B`.
///
/// The compactor holds no state. A single value can be shared freely across
/// threads.
///
/// # Example
///
/// ```
/// use uuid::Uuid;
/// use uuid_compact::UuidCompactor;
///
/// let compactor = UuidCompactor::new();
/// let uuid = Uuid::try_parse("be177dbe-5639-4ee1-90b1-09e108ffdddc").unwrap();
///
/// let short = compactor.compact64_uuid(&uuid);
/// assert_eq!(short, "vhd9vlY5TuGQsQnhCP_d3A");
/// assert_eq!(compactor.expand(&short).unwrap(), uuid);
///
/// let upper = compactor.compact32_uuid(&uuid);
/// assert_eq!(upper, "XYLX3PSWHFHODEFRBHQQR7653Q");
/// assert_eq!(compactor.expand(&upper).unwrap(), uuid);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct UuidCompactor;

impl UuidCompactor {
    /// See [`COMPACT64_LEN`].
    pub const COMPACT64_LEN: usize = COMPACT64_LEN;
    /// See [`COMPACT32_LEN`].
    pub const COMPACT32_LEN: usize = COMPACT32_LEN;

    /// Creates a compactor.
    pub const fn new() -> Self {
        Self
    }

    /// Compacts the two words of a UUID into a 22 character base64 string.
    ///
    /// Every bit pattern is accepted.
    pub fn compact64(&self, high: i64, low: i64) -> String {
        compact(&BASE64, high, low)
    }

    /// Compacts the two words of a UUID into a 26 character base32 string.
    ///
    /// Every bit pattern is accepted.
    pub fn compact32(&self, high: i64, low: i64) -> String {
        compact(&BASE32, high, low)
    }

    /// Compacts a [`Uuid`] into a 22 character base64 string.
    pub fn compact64_uuid(&self, uuid: &Uuid) -> String {
        let (high, low) = words_of(uuid);
        self.compact64(high, low)
    }

    /// Compacts a [`Uuid`] into a 26 character base32 string.
    pub fn compact32_uuid(&self, uuid: &Uuid) -> String {
        let (high, low) = words_of(uuid);
        self.compact32(high, low)
    }

    /// Parses a canonical UUID string and compacts it with base64.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] if `uuid` is not a valid UUID string.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn compact64_str(&self, uuid: &str) -> Result<String> {
        let uuid = Uuid::try_parse(uuid)?;
        Ok(self.compact64_uuid(&uuid))
    }

    /// Parses a canonical UUID string and compacts it with base32.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] if `uuid` is not a valid UUID string.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn compact32_str(&self, uuid: &str) -> Result<String> {
        let uuid = Uuid::try_parse(uuid)?;
        Ok(self.compact32_uuid(&uuid))
    }

    /// Expands a compact string of either form, picking the form by length.
    ///
    /// Lengths are counted in characters.
    ///
    /// # Errors
    ///
    /// - [`Error::Format`] if the length is neither [`COMPACT64_LEN`] nor
    ///   [`COMPACT32_LEN`].
    /// - [`Error::Decode`] if the string has a character outside the alphabet
    ///   its length selects.
    pub fn expand(&self, compact: &str) -> Result<Uuid> {
        self.expand_words(compact).map(uuid_of)
    }

    /// Expands a 22 character base64 compact string.
    ///
    /// # Errors
    ///
    /// - [`Error::Length`] if `compact` is not exactly [`COMPACT64_LEN`] long.
    /// - [`Error::Decode`] if it contains a character outside the base64url
    ///   alphabet.
    pub fn expand64(&self, compact: &str) -> Result<Uuid> {
        self.expand64_words(compact).map(uuid_of)
    }

    /// Expands a 26 character base32 compact string.
    ///
    /// # Errors
    ///
    /// - [`Error::Length`] if `compact` is not exactly [`COMPACT32_LEN`] long.
    /// - [`Error::Decode`] if it contains a character outside the base32
    ///   alphabet.
    pub fn expand32(&self, compact: &str) -> Result<Uuid> {
        self.expand32_words(compact).map(uuid_of)
    }

    /// Like [`UuidCompactor::expand`], returning `(high, low)`.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn expand_words(&self, compact: &str) -> Result<(i64, i64)> {
        match compact.chars().count() {
            COMPACT64_LEN => expand_with(&BASE64, compact),
            COMPACT32_LEN => expand_with(&BASE32, compact),
            _ => Err(Error::format(compact)),
        }
    }

    /// Like [`UuidCompactor::expand64`], returning `(high, low)`.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn expand64_words(&self, compact: &str) -> Result<(i64, i64)> {
        expect_len(compact, COMPACT64_LEN)?;
        expand_with(&BASE64, compact)
    }

    /// Like [`UuidCompactor::expand32`], returning `(high, low)`.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn expand32_words(&self, compact: &str) -> Result<(i64, i64)> {
        expect_len(compact, COMPACT32_LEN)?;
        expand_with(&BASE32, compact)
    }
}

fn compact(codec: &Codec, high: i64, low: i64) -> String {
    codec.encode(&pack(high, low))
}

fn expand_with(codec: &Codec, compact: &str) -> Result<(i64, i64)> {
    let bytes = codec.decode(compact)?;
    Ok(unpack(&bytes))
}

fn expect_len(compact: &str, expected: usize) -> Result<()> {
    if compact.chars().count() != expected {
        return Err(Error::Length { expected });
    }
    Ok(())
}

#[allow(clippy::cast_possible_wrap)]
pub(crate) fn words_of(uuid: &Uuid) -> (i64, i64) {
    let (high, low) = uuid.as_u64_pair();
    (high as i64, low as i64)
}

#[allow(clippy::cast_sign_loss)]
pub(crate) fn uuid_of((high, low): (i64, i64)) -> Uuid {
    Uuid::from_u64_pair(high as u64, low as u64)
}
