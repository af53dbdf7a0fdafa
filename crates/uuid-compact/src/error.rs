//! Error types for compacting and expanding UUIDs.
//!
//! Every failure is a rejection of malformed input. Nothing here is transient
//! and nothing is retried.
//!
//! ## Error Cases
//! - `Length`: a fixed-form entry point (`expand64`/`expand32`) was given a
//!   string of the wrong length.
//! - `Format`: the generic `expand` saw a length it does not recognise, or a
//!   decode produced something other than 16 bytes.
//! - `Decode`: the codec hit a character outside its alphabet.
//! - `Parse`: a canonical UUID string could not be parsed.

use thiserror::Error;

/// A result type defaulting to this crate's [`enum@Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All possible errors that `uuid-compact` can produce.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The input length does not match the fixed-form entry point.
    #[error("Expecting a compact uuid string of length {expected}")]
    Length {
        /// The only length the entry point accepts.
        expected: usize,
    },

    /// The input is not a compact UUID of any recognised form.
    #[error("Not a compact uuid string: {input}")]
    Format {
        /// The rejected input.
        input: String,
    },

    /// The codec rejected the input.
    ///
    /// The message matches [`Error::Format`]; the codec's own error is kept as
    /// the source.
    #[error("Not a compact uuid string: {input}")]
    Decode {
        /// The rejected input.
        input: String,
        #[source]
        source: data_encoding::DecodeError,
    },

    /// The canonical UUID string could not be parsed.
    #[error("Not a uuid string: {0}")]
    Parse(#[from] uuid::Error),
}

/// Coarse classification of an [`enum@Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong length for a fixed-form entry point.
    Length,
    /// Unrecognised input, unexpected decoded size, or an unparsable UUID
    /// string.
    Format,
    /// A character outside the codec's alphabet.
    Decode,
}

impl Error {
    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Length { .. } => ErrorKind::Length,
            Self::Format { .. } | Self::Parse(_) => ErrorKind::Format,
            Self::Decode { .. } => ErrorKind::Decode,
        }
    }

    pub(crate) fn format(input: &str) -> Self {
        Self::Format {
            input: input.to_owned(),
        }
    }

    pub(crate) fn decode(input: &str, source: data_encoding::DecodeError) -> Self {
        Self::Decode {
            input: input.to_owned(),
            source,
        }
    }
}
