//! Hearth Level - objects, components, and the level that owns them
//!
//! This crate holds the simulation core:
//! - `PassabilityMap` - sub-tile walkability grid with default-deny bounds
//! - `Component` - the closed set of per-tick behaviors
//! - `GameObject` - id, body, and ordered components
//! - `Level` - object registry, passability owner, load/save
//! - `ConfigTable` - archetype configs resolved at load time

pub mod component;
mod config;
mod level;
mod object;
mod passability;
mod record;

pub use component::{
    AnimationComponent, AnimationState, Component, ComponentBehavior, ComponentKind,
    ComponentType, MonsterMovementComponent, MovementComponent, ObjectBody, RenderComponent,
    RenderTransform, TickContext,
};
pub use config::{
    AnimationClips, CharacterConfig, ConfigTable, MonsterConfig, MovementConfig, RenderConfig,
};
pub use level::{Level, RenderItem};
pub use object::{GameObject, ObjectType};
pub use passability::{GridSize, PassabilityMap};
pub use record::{LevelData, ObjectRecord};
