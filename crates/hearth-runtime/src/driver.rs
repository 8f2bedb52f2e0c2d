//! Frame driver: input in, whole ticks through the level, camera out

use crate::camera::FollowCamera;
use crate::clock::GameClock;
use crate::config::WorldConfig;
use crate::input::InputState;
use hearth_core::{ObjectId, Vec2};
use hearth_level::{Level, MovementComponent};
use std::time::Duration;
use tracing::{trace, warn};

/// What one call to [`WorldDriver::frame`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// Ticks run during this frame
    pub ticks: u32,
    /// Ticks run since the driver was created
    pub tick_count: u64,
}

pub struct WorldDriver {
    level: Level,
    clock: GameClock,
    controlled: ObjectId,
    camera: FollowCamera,
    /// Set once the missing controlled object has been reported
    reported_missing: bool,
}

impl WorldDriver {
    pub fn new(level: Level, config: &WorldConfig) -> Self {
        let mut clock = GameClock::new(level.time());
        if let Some(max) = config.max_frame_delta() {
            clock = clock.with_max_frame_delta(max);
        }

        let mut camera = FollowCamera::new(config.camera);
        if let Some(object) = level.get_object(config.controlled) {
            camera.snap_to(object.position());
        }

        Self {
            level,
            clock,
            controlled: config.controlled,
            camera,
            reported_missing: false,
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn level_mut(&mut self) -> &mut Level {
        &mut self.level
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn camera(&self) -> &FollowCamera {
        &self.camera
    }

    pub fn controlled(&self) -> ObjectId {
        self.controlled
    }

    pub fn set_controlled(&mut self, id: ObjectId) {
        self.controlled = id;
        self.reported_missing = false;
    }

    /// Run one host frame of `delta` wall-clock time
    pub fn frame(&mut self, delta: Duration, input: &InputState) -> FrameReport {
        self.apply_input(input.axis());

        let level = &mut self.level;
        let ticks = self.clock.advance(delta, || level.update());

        let target = self.level.get_object(self.controlled).map(|o| o.position());
        self.camera.follow(target, self.level.time().tick_seconds());

        trace!(ticks, tick_count = self.clock.tick_count(), "frame");
        FrameReport {
            ticks,
            tick_count: self.clock.tick_count(),
        }
    }

    /// Run one host frame covering the wall-clock time since the previous
    /// call. The first call runs no ticks.
    pub fn frame_now(&mut self, input: &InputState) -> FrameReport {
        let delta = self.clock.sample_wall_clock();
        self.frame(delta, input)
    }

    fn apply_input(&mut self, axis: Vec2) {
        let id = self.controlled;
        let movement = self
            .level
            .object_mut(id)
            .and_then(|object| object.component_mut::<MovementComponent>());

        match movement {
            Ok(movement) => {
                movement.set_axis(axis);
                self.reported_missing = false;
            }
            Err(err) => {
                if !self.reported_missing {
                    warn!(%id, error = %err, "controlled object cannot take input");
                    self.reported_missing = true;
                }
            }
        }
    }

    /// Tear down the level
    pub fn destroy(mut self) {
        self.level.destroy();
    }
}
