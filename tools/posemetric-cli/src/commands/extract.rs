//! Extract nose-mouth distances from label directories and archives.

use std::path::PathBuf;

use clap::Args;

use posemetric_common::config::{AppConfig, FrameGeometry};
use posemetric_label_source::plan_sources;
use posemetric_processing_core::batch::RowCollector;
use posemetric_report::csv_export::write_csv;
use posemetric_report::plot::{default_renderer, render_best_effort};

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Directory with .txt label files
    #[arg(long, alias = "labels_dir")]
    pub labels_dir: Option<PathBuf>,

    /// One or more .tar.gz archives of label files
    #[arg(long, num_args = 1..)]
    pub archive: Vec<PathBuf>,

    /// Output CSV path [default from config: dists.csv]
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Frame width in pixels [default from config: 1080]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Frame height in pixels [default from config: 1920]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// Frames per second, for the time_s column [default from config: 30]
    #[arg(long)]
    pub fps: Option<f64>,

    /// Also save a PNG plot of distance over time
    #[arg(long)]
    pub plot: Option<PathBuf>,
}

pub fn run(args: ExtractArgs, config: &AppConfig) -> anyhow::Result<()> {
    if args.labels_dir.is_none() && args.archive.is_empty() {
        anyhow::bail!("Nothing to process: pass --labels-dir and/or --archive");
    }

    let geometry = FrameGeometry {
        width: args.width.unwrap_or(config.geometry.width),
        height: args.height.unwrap_or(config.geometry.height),
        fps: args.fps.unwrap_or(config.geometry.fps),
    };
    geometry.validate()?;
    let output = args.out.unwrap_or_else(|| config.output.clone());

    tracing::debug!(
        width = geometry.width,
        height = geometry.height,
        fps = geometry.fps,
        "Frame geometry"
    );

    let mut collector = RowCollector::new(geometry);
    for spec in plan_sources(args.labels_dir.as_deref(), &args.archive) {
        println!("Processing {}: {}", spec.kind, spec.path.display());
        let source = spec.open()?;
        let stats = collector.collect(source);
        println!(
            "  {} rows from {} files ({} unreadable, {} malformed lines skipped)",
            stats.rows, stats.files_read, stats.files_skipped, stats.lines_skipped
        );
    }

    let totals = collector.totals();
    println!("Total entries: {}", totals.rows);

    write_csv(collector.rows(), &output)?;
    println!("Wrote: {}", output.display());

    if let Some(plot_path) = args.plot {
        let renderer = default_renderer();
        if render_best_effort(renderer.as_deref(), collector.rows(), &plot_path) {
            println!("Saved plot: {}", plot_path.display());
        } else {
            println!("Plotting skipped, see warnings above");
        }
    }

    Ok(())
}
