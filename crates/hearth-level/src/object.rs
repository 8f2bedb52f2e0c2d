//! Game objects: an id, a body, and an ordered list of components

use crate::component::{
    AnimationComponent, Component, ComponentBehavior, ComponentKind, ComponentType,
    MonsterMovementComponent, MovementComponent, ObjectBody, RenderComponent, TickContext,
};
use crate::config::{CharacterConfig, MonsterConfig};
use crate::record::ObjectRecord;
use hearth_core::{HearthError, ObjectId, Result, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Concrete object variants a level can construct
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    Character,
    Monster,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Character => "character",
            ObjectType::Monster => "monster",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = HearthError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "character" => Ok(ObjectType::Character),
            "monster" => Ok(ObjectType::Monster),
            other => Err(HearthError::UnknownObjectType(other.to_string())),
        }
    }
}

/// A simulated object owned by a [`Level`](crate::Level).
///
/// Components run in the order they were added, so producers (movement) must
/// be attached before consumers (animation, render).
#[derive(Debug, Clone)]
pub struct GameObject {
    kind: ObjectType,
    config_id: u32,
    body: ObjectBody,
    components: Vec<Component>,
}

impl GameObject {
    /// A bare object with no components
    pub fn new(kind: ObjectType, id: ObjectId, config_id: u32) -> Self {
        Self {
            kind,
            config_id,
            body: ObjectBody::new(id),
            components: Vec::new(),
        }
    }

    /// A player character: directed movement, animation, render
    pub fn character(id: ObjectId, config: &CharacterConfig) -> Self {
        let mut object = Self::new(ObjectType::Character, id, config.id);
        object.add_component(MovementComponent::new(config.movement.clone()));
        object.add_component(AnimationComponent::new(config.render.clips.clone()));
        object.add_component(RenderComponent::new(config.render.clone()));
        object
    }

    /// A monster: path-following movement, animation, render. The config's
    /// patrol is not applied here; see [`Level::spawn`](crate::Level::spawn).
    pub fn monster(id: ObjectId, config: &MonsterConfig) -> Self {
        let mut object = Self::new(ObjectType::Monster, id, config.id);
        object.add_component(MonsterMovementComponent::new(config.movement.clone()));
        object.add_component(AnimationComponent::new(config.render.clips.clone()));
        object.add_component(RenderComponent::new(config.render.clone()));
        object
    }

    pub fn id(&self) -> ObjectId {
        self.body.id
    }

    pub fn kind(&self) -> ObjectType {
        self.kind
    }

    pub fn config_id(&self) -> u32 {
        self.config_id
    }

    pub fn body(&self) -> &ObjectBody {
        &self.body
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.body.position = position;
    }

    /// Facing angle in radians
    pub fn direction(&self) -> f32 {
        self.body.direction
    }

    pub fn set_direction(&mut self, direction: f32) {
        self.body.direction = direction;
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    /// Attach a component after the existing ones
    pub fn add_component(&mut self, component: impl Into<Component>) {
        self.components.push(component.into());
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn component_types(&self) -> Vec<ComponentType> {
        self.components.iter().map(|c| c.component_type()).collect()
    }

    pub fn has_component(&self, component_type: ComponentType) -> bool {
        self.components
            .iter()
            .any(|c| c.component_type() == component_type)
    }

    /// Look up the first component of type `T`
    pub fn component<T: ComponentKind>(&self) -> Result<&T> {
        self.components
            .iter()
            .find_map(T::from_component)
            .ok_or_else(|| missing_component(T::TYPE, self.body.id))
    }

    /// Look up the first component of type `T` mutably
    pub fn component_mut<T: ComponentKind>(&mut self) -> Result<&mut T> {
        let id = self.body.id;
        self.components
            .iter_mut()
            .find_map(T::from_component_mut)
            .ok_or_else(|| missing_component(T::TYPE, id))
    }

    /// Run every component once, in attachment order
    pub fn update(&mut self, ctx: &TickContext<'_>) {
        for component in &mut self.components {
            component.update(&mut self.body, ctx);
        }
    }

    /// Apply a saved record. Type and config are fixed at construction and
    /// are not read here.
    pub fn load(&mut self, record: &ObjectRecord) -> Result<()> {
        if !record.position.is_finite() {
            return Err(HearthError::ParseError(format!(
                "object {}: position must be finite",
                record.id
            )));
        }

        self.body.id = record.id;
        self.body.position = record.position;
        self.body.direction = record.direction.unwrap_or(0.0);
        self.body.velocity = Vec2::ZERO;

        if !record.path.is_empty() {
            let path_index = record.path_index.unwrap_or(0);
            self.component_mut::<MonsterMovementComponent>()?
                .restore_path(record.path.clone(), path_index);
        } else if let Ok(movement) = self.component_mut::<MonsterMovementComponent>() {
            movement.clear_path();
        }

        let body = self.body.clone();
        if let Ok(render) = self.component_mut::<RenderComponent>() {
            render.sync(&body);
        }
        Ok(())
    }

    /// Produce a record that [`GameObject::load`] turns back into this object
    pub fn save(&self) -> ObjectRecord {
        let mut record = ObjectRecord::new(
            self.body.id,
            self.kind.as_str(),
            self.config_id,
            self.body.position,
        )
        .with_direction(self.body.direction);

        if let Ok(movement) = self.component::<MonsterMovementComponent>() {
            if movement.is_moving() {
                record = record.with_path(movement.path().to_vec(), movement.path_index());
            }
        }

        record
    }

    /// Detach every component and drop the object
    pub fn destroy(mut self) {
        let detached = self.components.len();
        self.components.clear();
        debug!(id = %self.body.id, kind = %self.kind, detached, "object destroyed");
    }
}

fn missing_component(component_type: ComponentType, id: ObjectId) -> HearthError {
    HearthError::ComponentNotFound(format!("{} on object {}", component_type, id))
}
