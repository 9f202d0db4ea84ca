//! Reaction entity - one user's up/down stance on a post

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::EntityId;

/// The two mutually exclusive reaction kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Up,
    Down,
}

impl ReactionKind {
    /// Wire and storage representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// The kind this one excludes
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            other => Err(DomainError::InvalidArgument(format!(
                "Invalid action: {other:?} (expected \"up\" or \"down\")"
            ))),
        }
    }
}

/// Reaction entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub user_id: EntityId,
    pub target_id: EntityId,
    pub kind: ReactionKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(user_id: EntityId, target_id: EntityId, kind: ReactionKind) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            target_id,
            kind,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_kind(&self, kind: ReactionKind) -> bool {
        self.kind == kind
    }
}

/// Outcome of submitting a reaction for a (user, target) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionChange {
    /// Kind recorded after the submit
    pub kind: ReactionKind,
    /// Kind recorded before the submit, if any
    pub previous: Option<ReactionKind>,
}

impl ReactionChange {
    pub fn new(kind: ReactionKind, previous: Option<ReactionKind>) -> Self {
        Self { kind, previous }
    }

    /// First reaction for the pair
    pub fn is_created(&self) -> bool {
        self.previous.is_none()
    }

    /// An opposing reaction was replaced
    pub fn is_flipped(&self) -> bool {
        self.previous == Some(self.kind.opposite())
    }

    /// Same kind submitted again
    pub fn is_unchanged(&self) -> bool {
        self.previous == Some(self.kind)
    }
}

/// Aggregated reaction counts for a target, computed on read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReactionTally {
    pub up_count: i64,
    pub down_count: i64,
}

impl ReactionTally {
    pub fn new(up_count: i64, down_count: i64) -> Self {
        Self {
            up_count,
            down_count,
        }
    }

    /// Count for a single kind
    pub fn count(&self, kind: ReactionKind) -> i64 {
        match kind {
            ReactionKind::Up => self.up_count,
            ReactionKind::Down => self.down_count,
        }
    }

    pub fn total(&self) -> i64 {
        self.up_count + self.down_count
    }
}
