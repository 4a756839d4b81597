//! Write a default configuration file.

use std::path::PathBuf;

use posemetric_common::config::AppConfig;

pub fn run(path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = AppConfig::default();
    let written = match path {
        Some(path) => {
            config
                .save_to(&path)
                .map_err(|e| anyhow::anyhow!("Failed to write config {}: {e}", path.display()))?;
            path
        }
        None => config
            .save()
            .map_err(|e| anyhow::anyhow!("Failed to write config: {e}"))?,
    };

    println!("Wrote default configuration: {}", written.display());
    println!(
        "  Frame: {}x{} @ {}fps",
        config.geometry.width, config.geometry.height, config.geometry.fps
    );
    println!("  Output: {}", config.output.display());
    println!("  Log level: {}", config.logging.level);

    Ok(())
}
