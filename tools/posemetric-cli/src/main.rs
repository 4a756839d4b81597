//! posemetric CLI: nose-mouth distance extraction from pose label files.
//!
//! Usage:
//!   posemetric extract [OPTIONS]    Compute distances from label dirs/archives into a CSV
//!   posemetric inspect <FILE>       Show how each line of one label file is parsed
//!   posemetric init                 Write a default configuration file

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use posemetric_common::config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "posemetric",
    about = "Nose-mouth keypoint distances from YOLO-Pose label files",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    /// Configuration file (defaults to $XDG_CONFIG_HOME/posemetric/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute per-detection nose-mouth distances into a CSV
    Extract(commands::extract::ExtractArgs),

    /// Show how each line of a label file is parsed and measured
    Inspect {
        /// Path to a label file
        path: PathBuf,

        /// Frame width in pixels
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        width: Option<u32>,

        /// Frame height in pixels
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        height: Option<u32>,
    },

    /// Write a configuration file with default values
    Init {
        /// Destination (defaults to the standard config location)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {e}", path.display()))?,
        None => AppConfig::load(),
    };

    // Initialize logging
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    logging.json |= cli.json_logs;
    posemetric_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Extract(args) => commands::extract::run(args, &config),
        Commands::Inspect {
            path,
            width,
            height,
        } => commands::inspect::run(path, width, height, &config),
        Commands::Init { path } => commands::init::run(path),
    }
}
