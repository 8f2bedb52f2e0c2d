//! Stable object identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a game object, unique within one level.
///
/// Ids come from level files or from the level's own allocator; there is no
/// process-wide counter, so two levels may reuse the same values.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub u32);

impl ObjectId {
    /// Create an ObjectId from a raw value
    pub fn from_raw(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw value
    pub fn raw(&self) -> u32 {
        self.0
    }

    /// The id immediately after this one
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<u32> for ObjectId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.0)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw() {
        let id = ObjectId::from_raw(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(id.next(), ObjectId(43));
        assert_eq!(ObjectId(u32::MAX).next(), ObjectId(u32::MAX));
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&ObjectId(7)).unwrap();
        assert_eq!(json, "7");
        let back: ObjectId = serde_json::from_str("7").unwrap();
        assert_eq!(back, ObjectId(7));
    }
}
