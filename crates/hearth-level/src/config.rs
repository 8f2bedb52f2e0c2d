//! Archetype configs, resolved once at load time

use hearth_core::{HearthError, Result, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Movement tuning shared by directed and path-following movement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementConfig {
    /// World units per second
    pub speed: f32,
}

/// Clip names the render side plays for each animation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationClips {
    #[serde(default = "default_idle_clip")]
    pub idle: String,
    #[serde(default = "default_walk_clip")]
    pub walk: String,
}

fn default_idle_clip() -> String {
    "idle".to_string()
}

fn default_walk_clip() -> String {
    "walk".to_string()
}

impl Default for AnimationClips {
    fn default() -> Self {
        Self {
            idle: default_idle_clip(),
            walk: default_walk_clip(),
        }
    }
}

/// Mesh binding handed through to the render collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub mesh: String,
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default)]
    pub clips: AnimationClips,
}

fn default_scale() -> f32 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterConfig {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    pub movement: MovementConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterConfig {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    pub movement: MovementConfig,
    pub render: RenderConfig,
    /// Waypoints given to freshly spawned monsters of this kind
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patrol: Vec<Vec2>,
}

/// On-disk layout: `[[character]]` and `[[monster]]` arrays
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default, rename = "character")]
    characters: Vec<CharacterConfig>,
    #[serde(default, rename = "monster")]
    monsters: Vec<MonsterConfig>,
}

/// Lookup table for archetype configs keyed by integer id
#[derive(Debug, Default, Clone)]
pub struct ConfigTable {
    characters: HashMap<u32, CharacterConfig>,
    monsters: HashMap<u32, MonsterConfig>,
}

impl ConfigTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a table from a TOML file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a table from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        let mut table = Self::new();
        for config in file.characters {
            table.insert_character(config)?;
        }
        for config in file.monsters {
            table.insert_monster(config)?;
        }
        Ok(table)
    }

    pub fn insert_character(&mut self, config: CharacterConfig) -> Result<()> {
        validate_movement("character", config.id, &config.movement)?;
        if self.characters.contains_key(&config.id) {
            return Err(HearthError::DuplicateConfig {
                kind: "character".into(),
                id: config.id,
            });
        }
        self.characters.insert(config.id, config);
        Ok(())
    }

    pub fn insert_monster(&mut self, config: MonsterConfig) -> Result<()> {
        validate_movement("monster", config.id, &config.movement)?;
        if config.patrol.iter().any(|p| !p.is_finite()) {
            return Err(HearthError::InvalidConfig(format!(
                "monster {}: patrol waypoints must be finite",
                config.id
            )));
        }
        if self.monsters.contains_key(&config.id) {
            return Err(HearthError::DuplicateConfig {
                kind: "monster".into(),
                id: config.id,
            });
        }
        self.monsters.insert(config.id, config);
        Ok(())
    }

    pub fn character(&self, id: u32) -> Result<&CharacterConfig> {
        self.characters
            .get(&id)
            .ok_or_else(|| HearthError::ConfigNotFound {
                kind: "character".into(),
                id,
            })
    }

    pub fn monster(&self, id: u32) -> Result<&MonsterConfig> {
        self.monsters
            .get(&id)
            .ok_or_else(|| HearthError::ConfigNotFound {
                kind: "monster".into(),
                id,
            })
    }

    pub fn character_count(&self) -> usize {
        self.characters.len()
    }

    pub fn monster_count(&self) -> usize {
        self.monsters.len()
    }
}

fn validate_movement(kind: &str, id: u32, movement: &MovementConfig) -> Result<()> {
    if !movement.speed.is_finite() || movement.speed < 0.0 {
        return Err(HearthError::InvalidConfig(format!(
            "{} {}: speed must be a finite non-negative number, got {}",
            kind, id, movement.speed
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"
[[character]]
id = 1
name = "hero"
movement = { speed = 4.0 }
render = { mesh = "hero.glb", scale = 0.5 }

[[monster]]
id = 10
name = "slime"
movement = { speed = 2.0 }
render = { mesh = "slime.glb", clips = { walk = "hop" } }
patrol = [{ x = 1.0, y = 1.0 }, { x = 3.0, y = 1.0 }]
"#;

    #[test]
    fn test_parse_table() {
        let table = ConfigTable::from_toml_str(TABLE).unwrap();
        assert_eq!(table.character_count(), 1);
        assert_eq!(table.monster_count(), 1);

        let hero = table.character(1).unwrap();
        assert_eq!(hero.name, "hero");
        assert_eq!(hero.movement.speed, 4.0);
        assert_eq!(hero.render.scale, 0.5);
        assert_eq!(hero.render.clips, AnimationClips::default());

        let slime = table.monster(10).unwrap();
        assert_eq!(slime.render.scale, 1.0);
        assert_eq!(slime.render.clips.walk, "hop");
        assert_eq!(slime.render.clips.idle, "idle");
        assert_eq!(slime.patrol.len(), 2);
    }

    #[test]
    fn test_missing_config() {
        let table = ConfigTable::from_toml_str(TABLE).unwrap();
        assert!(matches!(
            table.character(10),
            Err(HearthError::ConfigNotFound { id: 10, .. })
        ));
        assert!(matches!(
            table.monster(1),
            Err(HearthError::ConfigNotFound { id: 1, .. })
        ));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let doubled = format!(
            "{}\n[[character]]\nid = 1\nmovement = {{ speed = 1.0 }}\nrender = {{ mesh = \"x\" }}\n",
            TABLE
        );
        assert!(matches!(
            ConfigTable::from_toml_str(&doubled),
            Err(HearthError::DuplicateConfig { id: 1, .. })
        ));
    }

    #[test]
    fn test_negative_speed_rejected() {
        let mut table = ConfigTable::new();
        let err = table
            .insert_character(CharacterConfig {
                id: 2,
                name: String::new(),
                movement: MovementConfig { speed: -1.0 },
                render: RenderConfig {
                    mesh: "m".into(),
                    scale: 1.0,
                    clips: AnimationClips::default(),
                },
            })
            .unwrap_err();
        assert!(matches!(err, HearthError::InvalidConfig(_)));
    }
}
