//! Serde field adapters storing a [`Uuid`] as its compact string.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use uuid::Uuid;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Row {
//!     #[serde(with = "uuid_compact::as_compact64")]
//!     id: Uuid,
//! }
//! ```
use serde::{Deserializer, Serializer};
use uuid::Uuid;

use crate::{Result, UuidCompactor};

struct CompactVisitor {
    expecting: &'static str,
    expand: fn(&UuidCompactor, &str) -> Result<Uuid>,
}

impl serde::de::Visitor<'_> for CompactVisitor {
    type Value = Uuid;

    fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
        formatter.write_str(self.expecting)
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        (self.expand)(&UuidCompactor, v).map_err(E::custom)
    }
}

pub mod as_compact64 {
    use super::*;

    pub fn serialize<S>(uuid: &Uuid, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&UuidCompactor.compact64_uuid(uuid))
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Uuid, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_str(CompactVisitor {
            expecting: "a 22 character base64url compact uuid string",
            expand: UuidCompactor::expand64,
        })
    }
}

pub mod as_compact32 {
    use super::*;

    pub fn serialize<S>(uuid: &Uuid, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&UuidCompactor.compact32_uuid(uuid))
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Uuid, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_str(CompactVisitor {
            expecting: "a 26 character base32 compact uuid string",
            expand: UuidCompactor::expand32,
        })
    }
}
