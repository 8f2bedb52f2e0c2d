//! Path-following movement for monsters

use super::{ComponentBehavior, ComponentType, ObjectBody, TickContext};
use crate::config::MovementConfig;
use hearth_core::Vec2;

/// Walks the owner along a list of waypoints at a fixed speed.
///
/// Each tick has a distance budget of `speed * dt`. Waypoints closer than the
/// remaining budget are reached within the same tick and the leftover carries
/// on toward the next one, so a fast monster on a dense path can clear several
/// segments per tick. Passability is not consulted; paths are trusted.
#[derive(Debug, Clone)]
pub struct MonsterMovementComponent {
    config: MovementConfig,
    path: Vec<Vec2>,
    path_index: usize,
    velocity: Vec2,
}

impl MonsterMovementComponent {
    pub fn new(config: MovementConfig) -> Self {
        Self {
            config,
            path: Vec::new(),
            path_index: 0,
            velocity: Vec2::ZERO,
        }
    }

    /// Replace the current path and start from its first waypoint
    pub fn set_path(&mut self, path: Vec<Vec2>) {
        self.path = path;
        self.path_index = 0;
        self.velocity = Vec2::ZERO;
    }

    /// Restore a saved path mid-way. An index past the end clears the path.
    pub fn restore_path(&mut self, path: Vec<Vec2>, path_index: usize) {
        if path_index >= path.len() {
            self.clear_path();
        } else {
            self.path = path;
            self.path_index = path_index;
        }
    }

    pub fn clear_path(&mut self) {
        self.path.clear();
        self.path_index = 0;
        self.velocity = Vec2::ZERO;
    }

    pub fn path(&self) -> &[Vec2] {
        &self.path
    }

    /// Index of the waypoint currently being walked toward
    pub fn path_index(&self) -> usize {
        self.path_index
    }

    pub fn is_moving(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn speed(&self) -> f32 {
        self.config.speed
    }
}

impl ComponentBehavior for MonsterMovementComponent {
    fn component_type(&self) -> ComponentType {
        ComponentType::MonsterMovement
    }

    fn update(&mut self, body: &mut ObjectBody, ctx: &TickContext<'_>) {
        if self.path.is_empty() {
            return;
        }

        let mut budget = self.config.speed * ctx.dt;

        // Every pass either reaches a waypoint or ends the tick, so this runs
        // at most path.len() + 1 times.
        while let Some(&target) = self.path.get(self.path_index) {
            let distance = body.position.distance(target);

            if distance < budget {
                body.position = target;
                budget -= distance;
                self.path_index += 1;
                if self.path_index >= self.path.len() {
                    self.clear_path();
                }
                continue;
            }

            let heading = (target - body.position).normalized();
            body.position += heading * budget;
            self.velocity = heading * self.config.speed;
            if !heading.is_zero() {
                body.direction = heading.angle();
            }
            break;
        }

        body.velocity = self.velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passability::{GridSize, PassabilityMap};
    use hearth_core::ObjectId;

    fn ctx(map: &PassabilityMap, dt: f32) -> TickContext<'_> {
        TickContext { dt, passability: map }
    }

    fn assert_near(actual: Vec2, expected: Vec2) {
        assert!(
            actual.distance(expected) < 1e-4,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_no_path_is_noop() {
        let map = PassabilityMap::new(GridSize::new(1, 1), 1);
        let mut movement = MonsterMovementComponent::new(MovementConfig { speed: 5.0 });
        let mut body = ObjectBody::new(ObjectId(1));
        body.position = Vec2::new(3.0, 3.0);

        movement.update(&mut body, &ctx(&map, 1.0));
        assert_eq!(body.position, Vec2::new(3.0, 3.0));
        assert!(!movement.is_moving());
    }

    #[test]
    fn test_consumes_multiple_segments_in_one_tick() {
        let map = PassabilityMap::new(GridSize::new(1, 1), 1);
        // One tick covers 15 units
        let mut movement = MonsterMovementComponent::new(MovementConfig { speed: 15.0 });
        let mut body = ObjectBody::new(ObjectId(1));

        movement.set_path(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
        ]);
        movement.update(&mut body, &ctx(&map, 1.0));

        // 10 units of segment one, 5 units into segment two
        assert_near(body.position, Vec2::new(10.0, 5.0));
        assert_eq!(movement.path_index(), 2);
        assert!(movement.is_moving());
        assert_near(movement.velocity(), Vec2::new(0.0, 15.0));
        assert_near(body.velocity, Vec2::new(0.0, 15.0));
        assert!((body.direction - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_partial_step_toward_waypoint() {
        let map = PassabilityMap::new(GridSize::new(1, 1), 1);
        let mut movement = MonsterMovementComponent::new(MovementConfig { speed: 2.0 });
        let mut body = ObjectBody::new(ObjectId(1));

        movement.set_path(vec![Vec2::new(3.0, 4.0)]);
        movement.update(&mut body, &ctx(&map, 0.5));

        assert_near(body.position, Vec2::new(0.6, 0.8));
        assert_eq!(movement.path_index(), 0);
    }

    #[test]
    fn test_exhausted_path_clears_and_stops() {
        let map = PassabilityMap::new(GridSize::new(1, 1), 1);
        let mut movement = MonsterMovementComponent::new(MovementConfig { speed: 4.0 });
        let mut body = ObjectBody::new(ObjectId(1));

        movement.set_path(vec![Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)]);
        // Tick one covers both segments with budget to spare
        movement.update(&mut body, &ctx(&map, 1.0));

        assert_eq!(body.position, Vec2::new(1.0, 1.0));
        assert!(!movement.is_moving());
        assert_eq!(movement.path_index(), 0);
        assert_eq!(movement.velocity(), Vec2::ZERO);
        assert_eq!(body.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_exact_budget_lands_without_advancing() {
        let map = PassabilityMap::new(GridSize::new(1, 1), 1);
        let mut movement = MonsterMovementComponent::new(MovementConfig { speed: 2.0 });
        let mut body = ObjectBody::new(ObjectId(1));

        movement.set_path(vec![Vec2::new(2.0, 0.0), Vec2::new(4.0, 0.0)]);
        movement.update(&mut body, &ctx(&map, 1.0));

        assert_eq!(body.position, Vec2::new(2.0, 0.0));
        assert_eq!(movement.path_index(), 0);

        // Next tick snaps through the reached waypoint
        movement.update(&mut body, &ctx(&map, 1.0));
        assert_eq!(body.position, Vec2::new(4.0, 0.0));
        assert_eq!(movement.path_index(), 1);
    }

    #[test]
    fn test_many_short_segments() {
        let map = PassabilityMap::new(GridSize::new(1, 1), 1);
        let mut movement = MonsterMovementComponent::new(MovementConfig { speed: 1000.0 });
        let mut body = ObjectBody::new(ObjectId(1));

        let path: Vec<Vec2> = (1..=10_000).map(|i| Vec2::new(i as f32 * 0.01, 0.0)).collect();
        movement.set_path(path);
        movement.update(&mut body, &ctx(&map, 1.0));

        assert_near(body.position, Vec2::new(100.0, 0.0));
        assert!(!movement.is_moving());
    }

    #[test]
    fn test_restore_path() {
        let mut movement = MonsterMovementComponent::new(MovementConfig { speed: 1.0 });
        movement.restore_path(vec![Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)], 1);
        assert_eq!(movement.path_index(), 1);
        assert_eq!(movement.path().len(), 2);

        movement.restore_path(vec![Vec2::new(1.0, 0.0)], 4);
        assert!(!movement.is_moving());
    }
}
