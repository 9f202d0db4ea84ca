//! Entity identifier - 64-bit integer key for users and posts
//!
//! Identifiers are opaque to the ledger. The only rule enforced here is that a
//! usable identifier is strictly positive; zero and negative values are treated
//! as "empty".

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifier of a user or a reaction target
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EntityId(i64);

impl EntityId {
    /// Create an EntityId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Check if the identifier refers to something (strictly positive)
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.0 > 0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, EntityIdParseError> {
        s.trim()
            .parse::<i64>()
            .map(EntityId)
            .map_err(|_| EntityIdParseError::InvalidFormat)
    }
}

/// Error when parsing an EntityId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EntityIdParseError {
    #[error("invalid identifier format")]
    InvalidFormat,
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<EntityId> for i64 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl std::str::FromStr for EntityId {
    type Err = EntityIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityId::parse(s)
    }
}

// Serialize as a JSON number; existing clients send and expect integer ids
impl Serialize for EntityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

// Deserialize from string or number
impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct EntityIdVisitor;

        impl Visitor<'_> for EntityIdVisitor {
            type Value = EntityId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or numeric string identifier")
            }

            fn visit_i64<E>(self, value: i64) -> Result<EntityId, E>
            where
                E: de::Error,
            {
                Ok(EntityId(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<EntityId, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(EntityId)
                    .map_err(|_| de::Error::custom("identifier out of range"))
            }

            fn visit_str<E>(self, value: &str) -> Result<EntityId, E>
            where
                E: de::Error,
            {
                EntityId::parse(value).map_err(|_| de::Error::custom("invalid identifier string"))
            }
        }

        deserializer.deserialize_any(EntityIdVisitor)
    }
}
