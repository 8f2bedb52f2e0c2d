//! Game clock with fixed-tick accumulator

use hearth_core::Time;
use std::time::{Duration, Instant};

/// Turns variable frame deltas into a whole number of fixed ticks.
///
/// The accumulator is a `Duration`, so deltas that add up to exactly `k` ticks
/// always produce exactly `k` ticks however they were split across frames.
pub struct GameClock {
    /// Fixed tick length
    time: Time,
    /// Total elapsed game time
    total_time: Duration,
    /// Time since last frame, after clamping
    delta_time: Duration,
    /// Frame deltas above this are clamped; `None` keeps every delta
    max_frame_delta: Option<Duration>,
    /// Accumulated time not yet consumed by ticks
    accumulator: Duration,
    /// Ticks consumed since creation
    tick_count: u64,
    /// Last real-time sample, for [`GameClock::sample_wall_clock`]
    last_instant: Option<Instant>,
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new(Time::default())
    }
}

impl GameClock {
    pub fn new(time: Time) -> Self {
        Self {
            time,
            total_time: Duration::ZERO,
            delta_time: Duration::ZERO,
            max_frame_delta: None,
            accumulator: Duration::ZERO,
            tick_count: 0,
            last_instant: None,
        }
    }

    /// Create a clock ticking at `hz` per second
    pub fn with_tick_rate(hz: u32) -> Self {
        Self::new(Time::from_rate(hz))
    }

    /// Clamp each frame delta, avoiding a spiral of death after a long stall
    pub fn with_max_frame_delta(mut self, max: Duration) -> Self {
        self.max_frame_delta = Some(max);
        self
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn total_time(&self) -> Duration {
        self.total_time
    }

    pub fn delta_time(&self) -> Duration {
        self.delta_time
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Add a frame's elapsed time to the accumulator
    pub fn accumulate(&mut self, delta: Duration) {
        let delta = match self.max_frame_delta {
            Some(max) => delta.min(max),
            None => delta,
        };
        self.delta_time = delta;
        self.total_time += delta;
        self.accumulator += delta;
    }

    /// Wall-clock time since the previous sample. The first sample only
    /// records the starting instant and measures zero.
    pub fn sample_wall_clock(&mut self) -> Duration {
        let now = Instant::now();
        self.last_instant
            .replace(now)
            .map_or(Duration::ZERO, |last| now.duration_since(last))
    }

    /// Returns true if there's enough accumulated time for a fixed tick
    pub fn should_fixed_update(&self) -> bool {
        self.accumulator >= self.time.tick()
    }

    /// Consume one fixed tick from the accumulator
    pub fn consume_fixed_step(&mut self) {
        self.accumulator = self.accumulator.saturating_sub(self.time.tick());
        self.tick_count += 1;
    }

    /// Accumulate `delta`, then drain whole ticks, calling `step` once each.
    /// Returns how many ticks ran.
    pub fn advance(&mut self, delta: Duration, mut step: impl FnMut()) -> u32 {
        self.accumulate(delta);
        let mut ticks = 0;
        while self.should_fixed_update() {
            self.consume_fixed_step();
            step();
            ticks += 1;
        }
        ticks
    }
}
