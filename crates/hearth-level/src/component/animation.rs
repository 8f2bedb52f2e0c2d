//! Animation state derived from velocity

use super::{ComponentBehavior, ComponentType, ObjectBody, TickContext};
use crate::config::AnimationClips;
use serde::{Deserialize, Serialize};

/// Speeds at or below this count as standing still
const WALK_THRESHOLD: f32 = 1e-3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationState {
    #[default]
    Idle,
    Walking,
}

impl AnimationState {
    pub fn from_speed(speed: f32) -> Self {
        if speed > WALK_THRESHOLD {
            AnimationState::Walking
        } else {
            AnimationState::Idle
        }
    }
}

/// Picks the animation the render side should play.
///
/// Must be attached after the movement component so it sees this tick's
/// velocity rather than the last one.
#[derive(Debug, Clone)]
pub struct AnimationComponent {
    state: AnimationState,
    clips: AnimationClips,
}

impl AnimationComponent {
    pub fn new(clips: AnimationClips) -> Self {
        Self {
            state: AnimationState::Idle,
            clips,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Clip name for the current state
    pub fn clip(&self) -> &str {
        match self.state {
            AnimationState::Idle => &self.clips.idle,
            AnimationState::Walking => &self.clips.walk,
        }
    }
}

impl ComponentBehavior for AnimationComponent {
    fn component_type(&self) -> ComponentType {
        ComponentType::Animation
    }

    fn update(&mut self, body: &mut ObjectBody, _ctx: &TickContext<'_>) {
        self.state = AnimationState::from_speed(body.velocity.length());
    }
}
