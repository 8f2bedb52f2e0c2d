//! Run command

use super::{load_world, load_world_config, print_objects, OutputFormat};
use anyhow::{Context, Result};
use hearth_runtime::{InputState, WorldDriver};
use hearth_scene::update_level_file;
use std::time::Duration;
use tracing::info;

pub struct RunArgs {
    pub level: String,
    pub configs: String,
    pub world: Option<String>,
    pub frames: u32,
    pub frame_ms: u64,
    pub realtime: bool,
    pub tick_rate: Option<u32>,
    pub keys: Vec<String>,
    pub save: Option<String>,
    pub format: OutputFormat,
}

pub fn run(args: RunArgs) -> Result<()> {
    let mut world = load_world_config(args.world.as_deref())?;
    if let Some(hz) = args.tick_rate {
        anyhow::ensure!(hz > 0, "--tick-rate must be at least 1");
        world.tick_rate = hz;
    }
    let (level, mut file) = load_world(&args.level, &args.configs, &world)?;

    let mut input = InputState::with_bindings(world.input.clone());
    for key in args.keys.iter().filter(|k| !k.is_empty()) {
        input.process_key_down(key.trim());
    }

    let mut driver = WorldDriver::new(level, &world);
    let delta = Duration::from_millis(args.frame_ms);
    if args.realtime {
        driver.frame_now(&input);
        for _ in 0..args.frames {
            std::thread::sleep(delta);
            driver.frame_now(&input);
        }
    } else {
        for _ in 0..args.frames {
            driver.frame(delta, &input);
        }
    }

    info!(
        frames = args.frames,
        ticks = driver.clock().tick_count(),
        "simulation finished"
    );

    print_objects(driver.level(), args.format)?;

    if let Some(out) = &args.save {
        update_level_file(driver.level(), &mut file);
        let content = toml::to_string_pretty(&file).context("Failed to encode level")?;
        std::fs::write(out, content).with_context(|| format!("Failed to write '{}'", out))?;
        info!(path = %out, "level saved");
    }

    driver.destroy();
    Ok(())
}
