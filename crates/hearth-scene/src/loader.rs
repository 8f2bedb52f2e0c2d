//! Level loading from TOML files

use crate::ascii::parse_ascii;
use crate::bake::{bake_passability, block_obstacles};
use crate::format::LevelFile;
use hearth_core::Result;
use hearth_level::{ConfigTable, GridSize, Level, LevelData, PassabilityMap};
use std::fs;
use std::path::Path;
use tracing::info;

/// Load a level file into `level`.
///
/// A `map` entry in the metadata is resolved relative to the level file.
pub fn load_level<P: AsRef<Path>>(
    path: P,
    configs: &ConfigTable,
    level: &mut Level,
) -> Result<LevelFile> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let level_dir = path.parent().unwrap_or(Path::new("."));
    let file: LevelFile = toml::from_str(&content)?;
    apply_level_file(&file, level_dir, configs, level)?;
    info!(path = %path.display(), name = %file.level.name, "level file loaded");
    Ok(file)
}

/// Load a level from a TOML string. A `map` entry is resolved against the
/// working directory.
pub fn load_level_string(content: &str, configs: &ConfigTable, level: &mut Level) -> Result<LevelFile> {
    let file: LevelFile = toml::from_str(content)?;
    apply_level_file(&file, Path::new("."), configs, level)?;
    Ok(file)
}

/// Push a parsed level file into `level`.
///
/// The passability grid is built first and the objects loaded second, so a
/// bad map or a bad object leaves the level untouched.
pub fn apply_level_file(
    file: &LevelFile,
    level_dir: &Path,
    configs: &ConfigTable,
    level: &mut Level,
) -> Result<usize> {
    let map = level_passability(file, level_dir, level.size(), level.resolution())?;

    let data = LevelData {
        objects: file.objects.clone(),
    };
    let count = level.load(&data, configs)?;
    level.set_passable_tiles(map.tiles().to_vec())?;
    Ok(count)
}

/// Build the passability grid a level file describes: its ASCII map if it
/// names one, otherwise an open grid, with obstacles blocked on top
pub fn level_passability(
    file: &LevelFile,
    level_dir: &Path,
    size: GridSize,
    resolution: u32,
) -> Result<PassabilityMap> {
    match &file.level.map {
        Some(map_path) => {
            let text = fs::read_to_string(level_dir.join(map_path))?;
            let mut map = parse_ascii(&text, size, resolution)?;
            block_obstacles(&mut map, &file.obstacles);
            Ok(map)
        }
        None => Ok(bake_passability(size, resolution, &file.obstacles)),
    }
}
