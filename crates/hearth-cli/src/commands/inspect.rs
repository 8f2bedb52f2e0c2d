//! Inspect command

use super::{load_world, load_world_config, print_objects, OutputFormat};
use anyhow::Result;

pub fn run(level_path: &str, configs_path: &str, world_path: Option<&str>, format: OutputFormat) -> Result<()> {
    let world = load_world_config(world_path)?;
    let (level, file) = load_world(level_path, configs_path, &world)?;

    if format == OutputFormat::Text {
        println!("Level: {} (v{})", file.level.name, file.level.version);
        if let Some(description) = &file.level.description {
            println!("  {}", description);
        }
    }
    print_objects(&level, format)
}
