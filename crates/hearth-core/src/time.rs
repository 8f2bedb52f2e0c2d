//! Fixed simulation tick

use std::time::Duration;

/// Default simulation rate in ticks per second
pub const DEFAULT_TICK_RATE: u32 = 60;

/// The simulation's time source: one fixed tick length.
///
/// All logic advances in whole ticks. Components never see wall-clock time,
/// only [`Time::tick_seconds`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Time {
    tick: Duration,
}

impl Default for Time {
    fn default() -> Self {
        Self::from_rate(DEFAULT_TICK_RATE)
    }
}

impl Time {
    /// Build from an explicit tick length. A zero length is bumped to 1ns.
    pub fn new(tick: Duration) -> Self {
        Self {
            tick: tick.max(Duration::from_nanos(1)),
        }
    }

    /// Build from a tick rate in Hz. A zero rate falls back to the default.
    pub fn from_rate(hz: u32) -> Self {
        let hz = if hz == 0 { DEFAULT_TICK_RATE } else { hz };
        Self::new(Duration::from_nanos(1_000_000_000 / u64::from(hz)))
    }

    /// Length of one tick
    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Length of one tick in seconds, for per-tick movement math
    pub fn tick_seconds(&self) -> f32 {
        self.tick.as_secs_f32()
    }

    /// Duration covered by `ticks` whole ticks
    pub fn ticks(&self, ticks: u32) -> Duration {
        self.tick * ticks
    }
}
