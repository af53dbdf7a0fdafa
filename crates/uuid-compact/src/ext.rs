use crate::{Result, UuidCompactor};
use uuid::Uuid;

/// Extension trait adding compact encodings to [`Uuid`].
///
/// A thin layer over [`UuidCompactor`] for callers that already hold a
/// [`Uuid`].
///
/// # Example
///
/// ```
/// use uuid::Uuid;
/// use uuid_compact::CompactExt;
///
/// let uuid = Uuid::try_parse("be177dbe-5639-4ee1-90b1-09e108ffdddc").unwrap();
/// assert_eq!(uuid.compact64(), "vhd9vlY5TuGQsQnhCP_d3A");
/// assert_eq!(Uuid::expand64("vhd9vlY5TuGQsQnhCP_d3A").unwrap(), uuid);
/// ```
pub trait CompactExt: Sized {
    /// Encodes into a 22 character URL-safe base64 string.
    fn compact64(&self) -> String;

    /// Encodes into a 26 character base32 string.
    fn compact32(&self) -> String;

    /// Decodes a 22 character base64 string.
    ///
    /// # Errors
    ///
    /// See [`UuidCompactor::expand64`].
    fn expand64(compact: &str) -> Result<Self>;

    /// Decodes a 26 character base32 string.
    ///
    /// # Errors
    ///
    /// See [`UuidCompactor::expand32`].
    fn expand32(compact: &str) -> Result<Self>;

    /// Decodes either form, chosen by length.
    ///
    /// # Errors
    ///
    /// See [`UuidCompactor::expand`].
    fn expand_compact(compact: &str) -> Result<Self>;
}

impl CompactExt for Uuid {
    fn compact64(&self) -> String {
        UuidCompactor.compact64_uuid(self)
    }

    fn compact32(&self) -> String {
        UuidCompactor.compact32_uuid(self)
    }

    fn expand64(compact: &str) -> Result<Self> {
        UuidCompactor.expand64(compact)
    }

    fn expand32(compact: &str) -> Result<Self> {
        UuidCompactor.expand32(compact)
    }

    fn expand_compact(compact: &str) -> Result<Self> {
        UuidCompactor.expand(compact)
    }
}
