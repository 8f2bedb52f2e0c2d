//! Hearth Scene - level files on disk
//!
//! This crate handles loading and saving levels in TOML format, plus the
//! two ways static geometry reaches the passability grid: obstacle boxes
//! baked at load time and hand-drawn ASCII maps.

mod ascii;
mod bake;
mod format;
mod loader;
mod saver;

pub use ascii::{parse_ascii, render_ascii, BLOCKED, OPEN};
pub use bake::{bake_passability, block_obstacles, Obstacle};
pub use format::{LevelFile, LevelMetadata};
pub use loader::{apply_level_file, level_passability, load_level, load_level_string};
pub use saver::{level_to_level_file, save_level, save_level_string, update_level_file};
