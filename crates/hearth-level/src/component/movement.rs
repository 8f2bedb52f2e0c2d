//! Player-directed movement

use super::{ComponentBehavior, ComponentType, ObjectBody, TickContext};
use crate::config::MovementConfig;
use hearth_core::Vec2;

/// Moves the owner along an input axis, refusing steps into impassable cells.
///
/// The axis is written by the world driver once per frame and then reused by
/// every tick of that frame. A blocked step is a hard stop: the owner stays
/// put and its velocity drops to zero for the tick.
#[derive(Debug, Clone)]
pub struct MovementComponent {
    config: MovementConfig,
    velocity: Vec2,
    axis: Vec2,
}

impl MovementComponent {
    pub fn new(config: MovementConfig) -> Self {
        Self {
            config,
            velocity: Vec2::ZERO,
            axis: Vec2::ZERO,
        }
    }

    /// Set the input axis; each component is clamped to `[-1, 1]`
    pub fn set_axis(&mut self, axis: Vec2) {
        self.axis = if axis.is_finite() {
            axis.clamp(-1.0, 1.0)
        } else {
            Vec2::ZERO
        };
    }

    pub fn axis(&self) -> Vec2 {
        self.axis
    }

    /// Velocity from the last tick, in world units per second
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn speed(&self) -> f32 {
        self.config.speed
    }
}

impl ComponentBehavior for MovementComponent {
    fn component_type(&self) -> ComponentType {
        ComponentType::Movement
    }

    fn update(&mut self, body: &mut ObjectBody, ctx: &TickContext<'_>) {
        self.velocity = Vec2::ZERO;

        if !self.axis.is_zero() {
            let heading = self.axis.normalized();
            let candidate = body.position + heading * (self.config.speed * ctx.dt);

            if ctx.passability.is_passable(candidate) {
                body.position = candidate;
                self.velocity = heading * self.config.speed;
                body.direction = heading.angle();
            }
        }

        body.velocity = self.velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passability::{GridSize, PassabilityMap};
    use hearth_core::ObjectId;

    fn body_at(x: f32, y: f32) -> ObjectBody {
        let mut body = ObjectBody::new(ObjectId(1));
        body.position = Vec2::new(x, y);
        body
    }

    /// 4x4 tiles at resolution 1, everything open except tile (2, 1)
    fn map_with_wall() -> PassabilityMap {
        let mut map = PassabilityMap::new(GridSize::new(4, 4), 1);
        map.set_tiles(vec![true; 16]).unwrap();
        map.set_cell(2, 1, false);
        map
    }

    #[test]
    fn test_commits_full_displacement_when_passable() {
        let map = map_with_wall();
        let ctx = TickContext {
            dt: 0.5,
            passability: &map,
        };
        let mut movement = MovementComponent::new(MovementConfig { speed: 2.0 });
        let mut body = body_at(0.5, 0.5);

        movement.set_axis(Vec2::new(0.0, 1.0));
        movement.update(&mut body, &ctx);

        assert_eq!(body.position, Vec2::new(0.5, 1.5));
        assert_eq!(movement.velocity(), Vec2::new(0.0, 2.0));
        assert_eq!(body.velocity, Vec2::new(0.0, 2.0));
        assert!((body.direction - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_hard_stop_at_impassable_cell() {
        let map = map_with_wall();
        let ctx = TickContext {
            dt: 0.5,
            passability: &map,
        };
        let mut movement = MovementComponent::new(MovementConfig { speed: 2.0 });
        let mut body = body_at(1.5, 1.5);
        body.direction = 0.25;

        // First move so the velocity is non-zero, then walk into the wall
        movement.set_axis(Vec2::new(0.0, -1.0));
        movement.update(&mut body, &ctx);
        assert_eq!(body.position, Vec2::new(1.5, 0.5));

        body.position = Vec2::new(1.5, 1.5);
        movement.set_axis(Vec2::new(1.0, 0.0));
        movement.update(&mut body, &ctx);

        assert_eq!(body.position, Vec2::new(1.5, 1.5));
        assert_eq!(movement.velocity(), Vec2::ZERO);
        assert_eq!(body.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_world_edge_blocks() {
        let map = map_with_wall();
        let ctx = TickContext {
            dt: 1.0,
            passability: &map,
        };
        let mut movement = MovementComponent::new(MovementConfig { speed: 1.0 });
        let mut body = body_at(0.5, 0.5);

        movement.set_axis(Vec2::new(-1.0, 0.0));
        movement.update(&mut body, &ctx);

        assert_eq!(body.position, Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_diagonal_axis_is_normalized() {
        let map = map_with_wall();
        let ctx = TickContext {
            dt: 1.0,
            passability: &map,
        };
        let mut movement = MovementComponent::new(MovementConfig { speed: 1.0 });
        let mut body = body_at(0.5, 2.5);

        movement.set_axis(Vec2::new(1.0, 1.0));
        movement.update(&mut body, &ctx);

        let moved = body.position - Vec2::new(0.5, 2.5);
        assert!((moved.length() - 1.0).abs() < 1e-5);
        assert!((moved.x - moved.y).abs() < 1e-6);
    }

    #[test]
    fn test_zero_axis_idles() {
        let map = map_with_wall();
        let ctx = TickContext {
            dt: 1.0,
            passability: &map,
        };
        let mut movement = MovementComponent::new(MovementConfig { speed: 1.0 });
        let mut body = body_at(0.5, 0.5);

        movement.update(&mut body, &ctx);
        assert_eq!(body.position, Vec2::new(0.5, 0.5));
        assert_eq!(movement.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_axis_clamped() {
        let mut movement = MovementComponent::new(MovementConfig { speed: 1.0 });
        movement.set_axis(Vec2::new(3.0, -7.0));
        assert_eq!(movement.axis(), Vec2::new(1.0, -1.0));

        movement.set_axis(Vec2::new(f32::NAN, 0.5));
        assert_eq!(movement.axis(), Vec2::ZERO);
    }
}
