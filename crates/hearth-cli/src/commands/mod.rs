//! CLI command implementations

pub mod inspect;
pub mod map;
pub mod run;

use anyhow::{Context, Result};
use clap::ValueEnum;
use hearth_core::{ObjectId, Vec2};
use hearth_level::{
    AnimationComponent, AnimationState, ConfigTable, GameObject, Level, MonsterMovementComponent,
};
use hearth_runtime::WorldConfig;
use hearth_scene::{load_level, LevelFile};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// World config from `path`, or the defaults when no path is given
pub fn load_world_config(path: Option<&str>) -> Result<WorldConfig> {
    match path {
        Some(path) => WorldConfig::load_file(path)
            .with_context(|| format!("Failed to load world config '{}'", path)),
        None => Ok(WorldConfig::default()),
    }
}

/// Build a level sized by `world` and fill it from a level file
pub fn load_world(
    level_path: &str,
    configs_path: &str,
    world: &WorldConfig,
) -> Result<(Level, LevelFile)> {
    let configs = ConfigTable::load_file(configs_path)
        .with_context(|| format!("Failed to load config table '{}'", configs_path))?;
    let mut level = Level::new(world.size, world.resolution, world.time());
    let file = load_level(level_path, &configs, &mut level)
        .with_context(|| format!("Failed to load level '{}'", level_path))?;
    Ok((level, file))
}

/// One object as printed by `run` and `inspect`
#[derive(Debug, Serialize)]
pub struct ObjectView {
    pub id: ObjectId,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub config: u32,
    pub position: Vec2,
    pub direction: f32,
    pub velocity: Vec2,
    pub animation: AnimationState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waypoints_left: Option<usize>,
}

impl ObjectView {
    pub fn from_object(object: &GameObject) -> Self {
        let animation = object
            .component::<AnimationComponent>()
            .map(|a| a.state())
            .unwrap_or_default();
        let waypoints_left = object
            .component::<MonsterMovementComponent>()
            .ok()
            .map(|m| m.path().len().saturating_sub(m.path_index()));

        Self {
            id: object.id(),
            kind: object.kind().as_str(),
            config: object.config_id(),
            position: object.position(),
            direction: object.direction(),
            velocity: object.velocity(),
            animation,
            waypoints_left,
        }
    }
}

pub fn print_objects(level: &Level, format: OutputFormat) -> Result<()> {
    let views: Vec<ObjectView> = level.objects().map(ObjectView::from_object).collect();

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&views).context("Failed to encode objects")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("{} object(s)", views.len());
            for view in &views {
                print!(
                    "  {:>4}  {:<9} config {:<3} pos ({:.3}, {:.3})  dir {:+.3}  vel ({:.3}, {:.3})  {:?}",
                    view.id.raw(),
                    view.kind,
                    view.config,
                    view.position.x,
                    view.position.y,
                    view.direction,
                    view.velocity.x,
                    view.velocity.y,
                    view.animation,
                );
                match view.waypoints_left {
                    Some(n) => println!("  waypoints {}", n),
                    None => println!(),
                }
            }
        }
    }

    Ok(())
}
