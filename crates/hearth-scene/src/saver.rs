//! Level saving to TOML files

use crate::format::LevelFile;
use hearth_core::Result;
use hearth_level::Level;
use std::fs;
use std::path::Path;

/// Save a level to a level file
pub fn save_level<P: AsRef<Path>>(path: P, level: &Level, name: impl Into<String>) -> Result<()> {
    let content = save_level_string(level, name)?;
    fs::write(path, content)?;
    Ok(())
}

/// Save a level to a TOML string
pub fn save_level_string(level: &Level, name: impl Into<String>) -> Result<String> {
    let file = level_to_level_file(level, name);
    let content = toml::to_string_pretty(&file)?;
    Ok(content)
}

/// Convert a level's objects to a level file with no static geometry
pub fn level_to_level_file(level: &Level, name: impl Into<String>) -> LevelFile {
    let mut file = LevelFile::new(name);
    file.objects = level.save().objects;
    file
}

/// Replace the objects of an existing level file, keeping its metadata,
/// obstacles and map reference
pub fn update_level_file(level: &Level, existing: &mut LevelFile) {
    existing.objects = level.save().objects;
}
