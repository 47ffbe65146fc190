//! shotcalc CLI: bake keyframed camera moves into per-frame positions.
//!
//! Usage:
//!   shotcalc bake <PROJECT>                  Print the per-frame table
//!   shotcalc timecode <FRAMERATE> <ADDRESS>  Convert a frame number or time code
//!   shotcalc info <PROJECT>                  Show project information

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use shotcalc_core::BakingConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "shotcalc",
    about = "Camera move calculator for stop-motion shots",
    version
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Bake a project into one row per frame
    Bake {
        /// Path to the project JSON file
        path: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// First frame to output (defaults to the first keyframe)
        #[arg(long)]
        start: Option<u64>,

        /// Last frame to output (defaults to the last keyframe)
        #[arg(long)]
        end: Option<u64>,

        /// Also output per-frame velocities
        #[arg(long)]
        velocities: bool,

        /// Log a coarse preview of every curve
        #[arg(long)]
        preview: bool,
    },

    /// Convert between frame numbers and HH:MM:SS:FF time codes
    Timecode {
        /// Frames per second
        framerate: u32,

        /// Frame number (e.g. 168) or time code (e.g. 00:00:07:00)
        address: String,
    },

    /// Show project information
    Info {
        /// Path to the project JSON file
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let preview = matches!(cli.command, Commands::Bake { preview: true, .. });
    let default_filter = if cli.verbose {
        "debug"
    } else if preview {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Bake {
            path,
            format,
            start,
            end,
            velocities,
            preview,
        } => {
            let cfg = BakingConfig {
                start_frame: start,
                end_frame: end,
                include_velocities: velocities,
            };
            commands::bake::run(path, format, &cfg, preview)?;
        }
        Commands::Timecode { framerate, address } => {
            commands::timecode::run(framerate, &address)?;
        }
        Commands::Info { path } => {
            commands::info::run(path)?;
        }
    }

    Ok(())
}
