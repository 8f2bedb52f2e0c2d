//! Persisted level state

use hearth_core::{ObjectId, Vec2};
use serde::{Deserialize, Serialize};

/// The serialized contents of a level: one record per object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    #[serde(default)]
    pub objects: Vec<ObjectRecord>,
}

/// One saved object.
///
/// `kind` stays a string so an unrecognized tag reaches the level loader and
/// fails there as an unknown type instead of as a parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub id: ObjectId,
    #[serde(rename = "type")]
    pub kind: String,
    /// Id of the archetype config in the config table
    pub config: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_index: Option<usize>,
    pub position: Vec2,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<Vec2>,
}

impl ObjectRecord {
    pub fn new(id: impl Into<ObjectId>, kind: impl Into<String>, config: u32, position: Vec2) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            config,
            direction: None,
            path_index: None,
            position,
            path: Vec::new(),
        }
    }

    pub fn with_direction(mut self, direction: f32) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn with_path(mut self, path: Vec<Vec2>, path_index: usize) -> Self {
        self.path = path;
        self.path_index = Some(path_index);
        self
    }
}
