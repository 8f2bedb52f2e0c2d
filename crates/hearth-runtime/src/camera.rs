//! Third-person camera that eases toward the controlled object

use hearth_core::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Camera placement relative to its target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub offset: Vec3,
    /// Lerp rate per second
    pub speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 7.0, -10.0),
            speed: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FollowCamera {
    position: Vec3,
    look_at: Vec3,
    config: CameraConfig,
}

impl FollowCamera {
    pub fn new(config: CameraConfig) -> Self {
        Self {
            position: config.offset,
            look_at: Vec3::ZERO,
            config,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Point the camera is aimed at
    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    /// Put the camera at its resting spot behind `target` at once
    pub fn snap_to(&mut self, target: Vec2) {
        self.look_at = target.to_ground(0.0);
        self.position = self.look_at + self.config.offset;
    }

    /// Ease toward `target`. With no target the camera stays put.
    pub fn follow(&mut self, target: Option<Vec2>, dt: f32) {
        let Some(target) = target else {
            return;
        };
        self.look_at = target.to_ground(0.0);
        let desired = self.look_at + self.config.offset;
        self.position = self.position.lerp(desired, self.config.speed * dt);
    }
}
