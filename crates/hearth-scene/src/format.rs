//! Level file format definitions

use crate::bake::Obstacle;
use hearth_level::ObjectRecord;
use serde::{Deserialize, Serialize};

/// Root structure of a level TOML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelFile {
    pub level: LevelMetadata,
    /// Boxes baked into the passability map as impassable
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub obstacles: Vec<Obstacle>,
    #[serde(default)]
    pub objects: Vec<ObjectRecord>,
}

/// Level metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelMetadata {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ASCII passability map, relative to the level file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<String>,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl LevelFile {
    /// Create an empty level file
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            level: LevelMetadata {
                name: name.into(),
                version: default_version(),
                description: None,
                map: None,
            },
            obstacles: Vec::new(),
            objects: Vec::new(),
        }
    }

    pub fn add_object(&mut self, record: ObjectRecord) {
        self.objects.push(record);
    }

    pub fn add_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }
}
