//! Output rows: one per parsed detection, in CSV column order.

use serde::{Deserialize, Serialize};

/// CSV header, in column order.
pub const COLUMNS: [&str; 9] = [
    "filename", "frame", "time_s", "nose_x", "nose_y", "mouth_x", "mouth_y", "d_px", "d_norm",
];

/// Nose-to-mouth measurement for one detection.
///
/// Field order matches [`COLUMNS`]; absent values serialize as empty fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRow {
    pub filename: String,
    pub frame: Option<u64>,
    pub time_s: Option<f64>,
    pub nose_x: Option<f64>,
    pub nose_y: Option<f64>,
    pub mouth_x: Option<f64>,
    pub mouth_y: Option<f64>,
    /// Nose-mouth distance in pixels.
    pub d_px: Option<f64>,
    /// `d_px` divided by the frame diagonal.
    pub d_norm: Option<f64>,
}

impl OutputRow {
    /// Time-series point for plotting: x is seconds when known, else the
    /// frame index; y is the pixel distance.
    pub fn plot_point(&self) -> Option<(f64, f64)> {
        let d_px = self.d_px?;
        let x = self.time_s.or_else(|| self.frame.map(|f| f as f64))?;
        Some((x, d_px))
    }
}
