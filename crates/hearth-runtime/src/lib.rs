//! Hearth Runtime - frame loop infrastructure
//!
//! Provides the pieces a host needs to drive a level:
//! - `GameClock` - fixed-tick accumulator for deterministic updates
//! - `InputState` - held keys mapped to two movement axes
//! - `FollowCamera` - camera easing toward the controlled object
//! - `WorldConfig` - world size, tick rate, camera and bindings from TOML
//! - `WorldDriver` - runs one host frame through all of the above

mod camera;
mod clock;
mod config;
mod driver;
mod input;

pub use camera::{CameraConfig, FollowCamera};
pub use clock::GameClock;
pub use config::WorldConfig;
pub use driver::{FrameReport, WorldDriver};
pub use input::{AxisBindings, InputState};
