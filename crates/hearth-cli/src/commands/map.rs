//! Map command

use super::load_world_config;
use anyhow::{Context, Result};
use hearth_scene::{level_passability, render_ascii, LevelFile};
use std::path::Path;

pub fn run(level_path: &str, world_path: Option<&str>) -> Result<()> {
    let world = load_world_config(world_path)?;

    let content = std::fs::read_to_string(level_path)
        .with_context(|| format!("Failed to read level '{}'", level_path))?;
    let file: LevelFile = toml::from_str(&content).context("Failed to parse level file")?;
    let level_dir = Path::new(level_path).parent().unwrap_or(Path::new("."));

    let map = level_passability(&file, level_dir, world.size, world.resolution)
        .context("Failed to build passability map")?;

    println!(
        "{}: {}x{} tiles, resolution {}, {}/{} sub-tiles passable",
        file.level.name,
        world.size.width,
        world.size.height,
        map.resolution(),
        map.passable_count(),
        map.expected_len()
    );
    print!("{}", render_ascii(&map));

    Ok(())
}
