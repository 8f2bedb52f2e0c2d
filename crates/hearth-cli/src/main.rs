//! Hearth CLI - headless driver for Hearth levels

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{inspect, map, run, OutputFormat};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hearth")]
#[command(about = "Run, inspect and map tile-world levels without a renderer", long_about = None)]
#[command(version)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a level for a number of frames and print the final state
    Run {
        /// Path to level file
        level: String,

        /// Path to archetype config table
        #[arg(long, default_value = "configs.toml")]
        configs: String,

        /// Path to world config
        #[arg(long)]
        world: Option<String>,

        /// Number of frames to run
        #[arg(long, default_value = "60")]
        frames: u32,

        /// Wall-clock length of each frame in milliseconds
        #[arg(long, default_value = "16")]
        frame_ms: u64,

        /// Sleep for each frame and feed the measured wall-clock time
        #[arg(long)]
        realtime: bool,

        /// Override the world config's tick rate (Hz)
        #[arg(long)]
        tick_rate: Option<u32>,

        /// Keys held for the whole run (comma-separated, e.g. "d,z")
        #[arg(long, value_delimiter = ',')]
        keys: Vec<String>,

        /// Write the final state to this level file
        #[arg(long)]
        save: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print a level's passability map
    Map {
        /// Path to level file
        level: String,

        /// Path to world config
        #[arg(long)]
        world: Option<String>,
    },

    /// List the objects in a level
    Inspect {
        /// Path to level file
        level: String,

        /// Path to archetype config table
        #[arg(long, default_value = "configs.toml")]
        configs: String,

        /// Path to world config
        #[arg(long)]
        world: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            level,
            configs,
            world,
            frames,
            frame_ms,
            realtime,
            tick_rate,
            keys,
            save,
            format,
        } => run::run(run::RunArgs {
            level,
            configs,
            world,
            frames,
            frame_ms,
            realtime,
            tick_rate,
            keys,
            save,
            format,
        }),
        Commands::Map { level, world } => map::run(&level, world.as_deref()),
        Commands::Inspect {
            level,
            configs,
            world,
            format,
        } => inspect::run(&level, &configs, world.as_deref(), format),
    }
}
