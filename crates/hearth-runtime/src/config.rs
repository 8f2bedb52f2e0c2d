//! World configuration loaded from TOML

use crate::camera::CameraConfig;
use crate::input::AxisBindings;
use hearth_core::{HearthError, ObjectId, Result, Time, DEFAULT_TICK_RATE};
use hearth_level::GridSize;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Everything needed to stand up a world around a level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// World size in tiles
    pub size: GridSize,
    /// Passability sub-tiles per tile, per axis
    pub resolution: u32,
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// Clamp for a single frame's delta; unset keeps every delta
    pub max_frame_delta_ms: Option<u64>,
    /// Object steered by input and followed by the camera
    pub controlled: ObjectId,
    pub camera: CameraConfig,
    pub input: AxisBindings,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size: GridSize::new(50, 50),
            resolution: 16,
            tick_rate: DEFAULT_TICK_RATE,
            max_frame_delta_ms: None,
            controlled: ObjectId(1),
            camera: CameraConfig::default(),
            input: AxisBindings::default(),
        }
    }
}

impl WorldConfig {
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.size.width == 0 || self.size.height == 0 {
            return Err(HearthError::InvalidConfig(format!(
                "world size must be non-zero, got {}x{}",
                self.size.width, self.size.height
            )));
        }
        if self.resolution == 0 {
            return Err(HearthError::InvalidConfig(
                "resolution must be at least 1".to_string(),
            ));
        }
        if self.tick_rate == 0 {
            return Err(HearthError::InvalidConfig(
                "tick_rate must be at least 1".to_string(),
            ));
        }
        if self.max_frame_delta_ms == Some(0) {
            return Err(HearthError::InvalidConfig(
                "max_frame_delta_ms must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }

    pub fn time(&self) -> Time {
        Time::from_rate(self.tick_rate)
    }

    pub fn max_frame_delta(&self) -> Option<Duration> {
        self.max_frame_delta_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::Vec3;

    #[test]
    fn test_defaults() {
        let config = WorldConfig::from_toml_str("").unwrap();
        assert_eq!(config, WorldConfig::default());
        assert_eq!(config.size, GridSize::new(50, 50));
        assert_eq!(config.resolution, 16);
        assert_eq!(config.time(), Time::default());
        assert_eq!(config.max_frame_delta(), None);
    }

    #[test]
    fn test_parse_overrides() {
        let config = WorldConfig::from_toml_str(
            r#"
size = { width = 20, height = 10 }
resolution = 4
tick_rate = 20
max_frame_delta_ms = 250
controlled = 7

[camera]
offset = { x = 0.0, y = 12.0, z = -6.0 }

[input]
right = ["l"]
"#,
        )
        .unwrap();

        assert_eq!(config.size, GridSize::new(20, 10));
        assert_eq!(config.time().tick(), Duration::from_millis(50));
        assert_eq!(config.max_frame_delta(), Some(Duration::from_millis(250)));
        assert_eq!(config.controlled, ObjectId(7));
        assert_eq!(config.camera.offset, Vec3::new(0.0, 12.0, -6.0));
        assert_eq!(config.camera.speed, 10.0);
        assert_eq!(config.input.right, vec!["l".to_string()]);
        assert_eq!(config.input.up, AxisBindings::default().up);
    }

    #[test]
    fn test_rejects_zero_values() {
        assert!(matches!(
            WorldConfig::from_toml_str("resolution = 0"),
            Err(HearthError::InvalidConfig(_))
        ));
        assert!(matches!(
            WorldConfig::from_toml_str("tick_rate = 0"),
            Err(HearthError::InvalidConfig(_))
        ));
        assert!(matches!(
            WorldConfig::from_toml_str("size = { width = 0, height = 5 }"),
            Err(HearthError::InvalidConfig(_))
        ));
        assert!(matches!(
            WorldConfig::from_toml_str("max_frame_delta_ms = 0"),
            Err(HearthError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            WorldConfig::from_toml_str("resolution = \"many\""),
            Err(HearthError::TomlParseError(_))
        ));
    }
}
