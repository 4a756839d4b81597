//! Row assembly: one output row per parsed detection.

use posemetric_common::config::FrameGeometry;
use posemetric_label_model::detection::{parse_label_text, DetectionRecord, ParsedLine};
use posemetric_label_model::frame::frame_index;
use posemetric_label_model::row::OutputRow;

use crate::metric::NoseMouthMetric;

/// Rows produced from one label file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileRows {
    pub rows: Vec<OutputRow>,
    /// Non-blank lines the parser rejected.
    pub skipped_lines: usize,
}

/// Build the row for one detection of file `filename`.
pub fn assemble_row(
    filename: &str,
    frame: Option<u64>,
    record: &DetectionRecord,
    geometry: &FrameGeometry,
) -> OutputRow {
    let time_s = frame.and_then(|f| geometry.frame_to_secs(f));
    let metric = NoseMouthMetric::compute(record, geometry);

    OutputRow {
        filename: filename.to_string(),
        frame,
        time_s,
        nose_x: metric.map(|m| m.nose.x),
        nose_y: metric.map(|m| m.nose.y),
        mouth_x: metric.map(|m| m.mouth.x),
        mouth_y: metric.map(|m| m.mouth.y),
        d_px: metric.map(|m| m.distance_px),
        d_norm: metric.map(|m| m.distance_norm),
    }
}

/// Parse a label file's text and assemble a row for every detection, in
/// line order. Rejected lines produce no row.
pub fn rows_for_file(filename: &str, text: &str, geometry: &FrameGeometry) -> FileRows {
    let frame = frame_index(filename);
    let mut out = FileRows::default();

    for parsed in parse_label_text(text) {
        match parsed {
            ParsedLine::Parsed(record) => {
                out.rows
                    .push(assemble_row(filename, frame, &record, geometry));
            }
            ParsedLine::Skipped(reason) => {
                tracing::trace!(file = filename, %reason, "Skipping label line");
                out.skipped_lines += 1;
            }
        }
    }

    out
}
