//! Compact, URL-safe strings for UUIDs.
//!
//! A UUID's 16 bytes are packed big-endian and encoded with either URL-safe
//! base64 (22 characters) or RFC 4648 base32 (26 characters). The trailing
//! padding the codec would emit is dropped and restored on the way back, so
//! every UUID round-trips exactly.
//!
//! ```
//! use uuid::Uuid;
//! use uuid_compact::{COMPACT64_LEN, CompactExt};
//!
//! let uuid = Uuid::from_u64_pair(u64::MAX, 0);
//! let compact = uuid.compact64();
//! assert_eq!(compact.len(), COMPACT64_LEN);
//! assert_eq!(Uuid::expand_compact(&compact).unwrap(), uuid);
//! ```

mod codec;
mod compactor;
mod error;
mod ext;
#[cfg(feature = "serde")]
mod serde;
mod words;

pub use crate::codec::*;
pub use crate::compactor::*;
pub use crate::error::*;
pub use crate::ext::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
pub use crate::words::{UUID_BYTES, UuidBytes, pack, unpack};
