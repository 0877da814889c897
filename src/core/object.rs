//! Puzzle objects: identifiers, categories, and roster entries.
//!
//! Every passenger in a level (schoolgirl, janitor, gardener, ...) is a
//! `GameObject` with a unique `ObjectId`. Objects are created once when a
//! level is authored and never change afterwards.
//!
//! ## Categories
//!
//! `ObjectType` is an open-ended category identifier. The engine only reads
//! categories inside category-pairing rules; it never hardcodes what a
//! category means. The well-known categories of the shipped game are
//! available as associated constants.
//!
//! ```
//! use river_crossing::core::ObjectType;
//!
//! assert_eq!(ObjectType::STUDENT.to_string(), "Schoolgirl");
//!
//! // Games may define their own categories.
//! let ferryman = ObjectType::new(7);
//! assert_eq!(ferryman.to_string(), "Type(7)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for an object in a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

impl ObjectId {
    /// Create a new object ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for ObjectId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Object({})", self.0)
    }
}

/// Object category. Only category-pairing rules interpret it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectType(pub u16);

impl ObjectType {
    /// A schoolgirl. The vulnerable party in every shipped pairing rule.
    pub const STUDENT: Self = Self(0);

    /// A janitor.
    pub const JANITOR: Self = Self(1);

    /// A gardener.
    pub const GARDENER: Self = Self(2);

    /// Create a category from a raw value.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw category value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::STUDENT => f.write_str("Schoolgirl"),
            Self::JANITOR => f.write_str("Janitor"),
            Self::GARDENER => f.write_str("Gardener"),
            Self(other) => write!(f, "Type({})", other),
        }
    }
}

/// A passenger in a level.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameObject {
    /// Unique ID within the level.
    pub id: ObjectId,

    /// Category used by pairing rules.
    pub object_type: ObjectType,

    /// Display name (e.g. "Schoolgirl #1").
    pub name: String,
}

impl GameObject {
    /// Create a new object.
    pub fn new(id: ObjectId, object_type: ObjectType, name: impl Into<String>) -> Self {
        Self {
            id,
            object_type,
            name: name.into(),
        }
    }
}
