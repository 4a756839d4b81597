//! Show how each line of one label file is parsed and measured.

use std::path::PathBuf;

use posemetric_common::config::{AppConfig, FrameGeometry};
use posemetric_label_model::detection::{
    label_lines, parse_line, KeypointLayout, ParsedLine, MIN_TOKENS,
};
use posemetric_label_model::frame::frame_index;
use posemetric_processing_core::metric::NoseMouthMetric;

pub fn run(
    path: PathBuf,
    width: Option<u32>,
    height: Option<u32>,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let geometry = FrameGeometry {
        width: width.unwrap_or(config.geometry.width),
        height: height.unwrap_or(config.geometry.height),
        ..config.geometry
    };
    geometry.validate()?;

    let text = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    println!("Label file: {}", path.display());
    match frame_index(&name) {
        Some(frame) => println!(
            "  Frame: {frame} ({})",
            geometry
                .frame_to_secs(frame)
                .map(|t| format!("{t:.3}s"))
                .unwrap_or_else(|| "no time".to_string())
        ),
        None => println!("  Frame: none"),
    }
    println!("  Geometry: {}x{}", geometry.width, geometry.height);
    println!();

    let mut parsed_count = 0usize;
    let mut skipped_count = 0usize;
    for (number, line) in label_lines(&text).enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = number + 1;
        match parse_line(line) {
            ParsedLine::Parsed(record) => {
                parsed_count += 1;
                let trailing = line.split_whitespace().count() - MIN_TOKENS;
                let layout = KeypointLayout::for_remainder(trailing);
                println!(
                    "  {line_no:>4}: class {} box ({:.3}, {:.3}, {:.3}, {:.3}) {} keypoints as {:?}",
                    record.class_id,
                    record.bbox.center_x,
                    record.bbox.center_y,
                    record.bbox.width,
                    record.bbox.height,
                    record.keypoints.len(),
                    layout
                );
                if layout == KeypointLayout::PairsDropLast {
                    println!("        trailing value dropped (odd keypoint count)");
                }
                match NoseMouthMetric::compute(&record, &geometry) {
                    Some(m) => println!(
                        "        nose ({:.1}, {:.1}) mouth ({:.1}, {:.1}) d_px {:.2} d_norm {:.5}",
                        m.nose.x, m.nose.y, m.mouth.x, m.mouth.y, m.distance_px, m.distance_norm
                    ),
                    None => println!("        no nose/mouth pair"),
                }
            }
            ParsedLine::Skipped(reason) => {
                skipped_count += 1;
                println!("  {line_no:>4}: skipped ({reason})");
            }
        }
    }

    println!();
    println!("{parsed_count} detections, {skipped_count} lines skipped");

    Ok(())
}
