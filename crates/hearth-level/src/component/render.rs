//! Render binding

use super::{ComponentBehavior, ComponentType, ObjectBody, TickContext};
use crate::config::RenderConfig;
use hearth_core::Vec3;

/// Where the render side should draw the owner, in y-up 3D space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderTransform {
    pub position: Vec3,
    /// Rotation about the vertical axis, in radians
    pub yaw: f32,
    pub scale: f32,
}

/// Mesh binding plus a transform snapshot refreshed every tick.
///
/// Nothing here talks to a graphics API; the render collaborator reads
/// [`RenderComponent::transform`] and draws whatever [`RenderComponent::mesh`]
/// names.
#[derive(Debug, Clone)]
pub struct RenderComponent {
    config: RenderConfig,
    transform: RenderTransform,
}

impl RenderComponent {
    pub fn new(config: RenderConfig) -> Self {
        let transform = RenderTransform {
            scale: config.scale,
            ..RenderTransform::default()
        };
        Self { config, transform }
    }

    pub fn mesh(&self) -> &str {
        &self.config.mesh
    }

    pub fn transform(&self) -> RenderTransform {
        self.transform
    }

    /// Copy the body's placement into the render transform
    pub fn sync(&mut self, body: &ObjectBody) {
        self.transform.position = body.position.to_ground(0.0);
        self.transform.yaw = body.direction;
    }
}

impl ComponentBehavior for RenderComponent {
    fn component_type(&self) -> ComponentType {
        ComponentType::Render
    }

    fn update(&mut self, body: &mut ObjectBody, _ctx: &TickContext<'_>) {
        self.sync(body);
    }
}
