//! Hearth Core - Foundational types for the Hearth simulation
//!
//! This crate provides the types every other Hearth crate depends on:
//! - `ObjectId` - Per-level object identifiers
//! - `Time` - The fixed simulation tick
//! - `Vec2`, `Vec3` - Spatial types
//! - Error types and Result alias

mod error;
mod id;
mod time;
mod types;

pub use error::{HearthError, Result};
pub use id::ObjectId;
pub use time::{Time, DEFAULT_TICK_RATE};
pub use types::{Vec2, Vec3};
