//! Components: the closed set of behaviors an object can carry
//!
//! Every component is owned by exactly one [`GameObject`](crate::GameObject)
//! and updated once per tick, in attachment order. A component never holds a
//! pointer back to its owner; instead the owner lends out its [`ObjectBody`]
//! for the duration of the update, and the level lends a [`TickContext`] for
//! anything world-wide (tick length, passability).

mod animation;
mod monster_movement;
mod movement;
mod render;

pub use animation::{AnimationComponent, AnimationState};
pub use monster_movement::MonsterMovementComponent;
pub use movement::MovementComponent;
pub use render::{RenderComponent, RenderTransform};

use crate::passability::PassabilityMap;
use hearth_core::{ObjectId, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The part of an object that components read and write
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectBody {
    pub id: ObjectId,
    /// World position in tile units
    pub position: Vec2,
    /// Facing angle in radians, measured from +x toward +y
    pub direction: f32,
    /// Current velocity in world units per second, written by movement
    pub velocity: Vec2,
}

impl ObjectBody {
    pub fn new(id: ObjectId) -> Self {
        Self {
            id,
            position: Vec2::ZERO,
            direction: 0.0,
            velocity: Vec2::ZERO,
        }
    }
}

/// Read-only world state lent to components for one tick
#[derive(Clone, Copy)]
pub struct TickContext<'a> {
    /// Tick length in seconds
    pub dt: f32,
    pub passability: &'a PassabilityMap,
}

/// Stable tag for each component variant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    Movement,
    MonsterMovement,
    Animation,
    Render,
}

impl ComponentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Movement => "movement",
            ComponentType::MonsterMovement => "monster_movement",
            ComponentType::Animation => "animation",
            ComponentType::Render => "render",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What every component can do
pub trait ComponentBehavior {
    fn component_type(&self) -> ComponentType;

    /// Advance one tick
    fn update(&mut self, body: &mut ObjectBody, ctx: &TickContext<'_>);
}

/// A component attached to an object
#[derive(Debug, Clone)]
pub enum Component {
    Movement(MovementComponent),
    MonsterMovement(MonsterMovementComponent),
    Animation(AnimationComponent),
    Render(RenderComponent),
}

impl ComponentBehavior for Component {
    fn component_type(&self) -> ComponentType {
        match self {
            Component::Movement(c) => c.component_type(),
            Component::MonsterMovement(c) => c.component_type(),
            Component::Animation(c) => c.component_type(),
            Component::Render(c) => c.component_type(),
        }
    }

    fn update(&mut self, body: &mut ObjectBody, ctx: &TickContext<'_>) {
        match self {
            Component::Movement(c) => c.update(body, ctx),
            Component::MonsterMovement(c) => c.update(body, ctx),
            Component::Animation(c) => c.update(body, ctx),
            Component::Render(c) => c.update(body, ctx),
        }
    }
}

/// A concrete component type that can be looked up on an object by its tag
pub trait ComponentKind: ComponentBehavior + Sized {
    const TYPE: ComponentType;

    fn from_component(component: &Component) -> Option<&Self>;

    fn from_component_mut(component: &mut Component) -> Option<&mut Self>;
}

macro_rules! component_kind {
    ($ty:ty, $variant:ident) => {
        impl ComponentKind for $ty {
            const TYPE: ComponentType = ComponentType::$variant;

            fn from_component(component: &Component) -> Option<&Self> {
                match component {
                    Component::$variant(c) => Some(c),
                    _ => None,
                }
            }

            fn from_component_mut(component: &mut Component) -> Option<&mut Self> {
                match component {
                    Component::$variant(c) => Some(c),
                    _ => None,
                }
            }
        }

        impl From<$ty> for Component {
            fn from(c: $ty) -> Self {
                Component::$variant(c)
            }
        }
    };
}

component_kind!(MovementComponent, Movement);
component_kind!(MonsterMovementComponent, MonsterMovement);
component_kind!(AnimationComponent, Animation);
component_kind!(RenderComponent, Render);
