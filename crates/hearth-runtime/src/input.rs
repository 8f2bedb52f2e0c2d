//! Input state management
//!
//! Hearth never polls a device. The host feeds key events in by name, or sets
//! the axes directly, and the driver reads back a movement axis once a frame.

use hearth_core::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Keys driving each half of the two movement axes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisBindings {
    pub right: Vec<String>,
    pub left: Vec<String>,
    pub up: Vec<String>,
    pub down: Vec<String>,
}

impl Default for AxisBindings {
    fn default() -> Self {
        Self {
            right: keys(&["d", "ArrowRight"]),
            left: keys(&["q", "a", "ArrowLeft"]),
            up: keys(&["z", "w", "ArrowUp"]),
            down: keys(&["s", "ArrowDown"]),
        }
    }
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// Tracks held keys and the resulting movement axes
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Keys currently held down
    keys_down: HashSet<String>,
    bindings: AxisBindings,
    /// Axes set by the host, taking priority over held keys
    axis_override: Option<Vec2>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: AxisBindings) -> Self {
        Self {
            bindings,
            ..Self::default()
        }
    }

    pub fn bindings(&self) -> &AxisBindings {
        &self.bindings
    }

    /// Process a key press event
    pub fn process_key_down(&mut self, key: impl Into<String>) {
        self.keys_down.insert(key.into());
    }

    /// Process a key release event
    pub fn process_key_up(&mut self, key: &str) {
        self.keys_down.remove(key);
    }

    pub fn is_key_down(&self, key: &str) -> bool {
        self.keys_down.contains(key)
    }

    /// Set both axes directly, clamped to [-1, 1]
    pub fn set_axes(&mut self, x: f32, y: f32) {
        self.axis_override = Some(Vec2::new(x, y).clamp(-1.0, 1.0));
    }

    /// Go back to reading the axes from held keys
    pub fn clear_axes(&mut self) {
        self.axis_override = None;
    }

    /// Current movement axes. Opposing keys cancel out.
    pub fn axis(&self) -> Vec2 {
        if let Some(axis) = self.axis_override {
            return axis;
        }
        Vec2::new(
            self.half_axis(&self.bindings.right) - self.half_axis(&self.bindings.left),
            self.half_axis(&self.bindings.up) - self.half_axis(&self.bindings.down),
        )
    }

    fn half_axis(&self, keys: &[String]) -> f32 {
        if keys.iter().any(|k| self.keys_down.contains(k)) {
            1.0
        } else {
            0.0
        }
    }
}
