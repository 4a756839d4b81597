//! Diagnostic time-series plot of the nose-mouth distance.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;

use posemetric_common::error::{PosemetricError, PosemetricResult};
use posemetric_label_model::row::OutputRow;

/// Something that can draw `(x, d_px)` points into an image file.
pub trait PlotRenderer {
    /// Renderer name for logging.
    fn name(&self) -> &str;

    fn render(&self, points: &[(f64, f64)], path: &Path) -> PosemetricResult<()>;
}

/// Plot points for rows with a distance: x is seconds when known, else the
/// frame index. Rows with neither are left out.
pub fn time_series(rows: &[OutputRow]) -> Vec<(f64, f64)> {
    rows.iter().filter_map(OutputRow::plot_point).collect()
}

/// The renderer compiled into this build, if any.
pub fn default_renderer() -> Option<Box<dyn PlotRenderer>> {
    #[cfg(feature = "plot")]
    {
        Some(Box::new(PngPlotRenderer::default()))
    }
    #[cfg(not(feature = "plot"))]
    {
        None
    }
}

/// Render the distance plot without letting any failure escape.
///
/// Returns `true` if the image was written. Missing renderer, rendering
/// errors and renderer panics are logged as warnings.
pub fn render_best_effort(
    renderer: Option<&dyn PlotRenderer>,
    rows: &[OutputRow],
    path: &Path,
) -> bool {
    let Some(renderer) = renderer else {
        tracing::warn!(path = %path.display(), "Plotting skipped: built without plot support");
        return false;
    };

    let points = time_series(rows);
    match catch_unwind(AssertUnwindSafe(|| renderer.render(&points, path))) {
        Ok(Ok(())) => {
            tracing::debug!(
                renderer = renderer.name(),
                points = points.len(),
                path = %path.display(),
                "Saved plot"
            );
            true
        }
        Ok(Err(e)) => {
            tracing::warn!(renderer = renderer.name(), error = %e, "Plotting skipped");
            false
        }
        Err(_) => {
            tracing::warn!(renderer = renderer.name(), "Plotting skipped: renderer panicked");
            false
        }
    }
}

/// Axis range covering all finite values, padded when degenerate.
#[cfg_attr(not(feature = "plot"), allow(dead_code))]
fn axis_range(values: impl Iterator<Item = f64>) -> std::ops::Range<f64> {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !min.is_finite() {
        return 0.0..1.0;
    }
    if max - min < f64::EPSILON {
        return (min - 1.0)..(max + 1.0);
    }
    let pad = (max - min) * 0.02;
    (min - pad)..(max + pad)
}

/// PNG line chart with small markers, drawn with `plotters`.
///
/// The build carries no font backend, so the chart has no text labels.
#[cfg(feature = "plot")]
#[derive(Debug, Clone)]
pub struct PngPlotRenderer {
    pub width: u32,
    pub height: u32,
    pub marker_size: u32,
}

#[cfg(feature = "plot")]
impl Default for PngPlotRenderer {
    fn default() -> Self {
        Self {
            width: 1800,
            height: 600,
            marker_size: 2,
        }
    }
}

#[cfg(feature = "plot")]
impl PlotRenderer for PngPlotRenderer {
    fn name(&self) -> &str {
        "png"
    }

    fn render(&self, points: &[(f64, f64)], path: &Path) -> PosemetricResult<()> {
        use plotters::prelude::*;

        let finite: Vec<(f64, f64)> = points
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .collect();
        let x_range = axis_range(finite.iter().map(|p| p.0));
        let y_range = axis_range(finite.iter().map(|p| p.1));

        let plot_err = |e: &dyn std::fmt::Display| PosemetricError::plot(e.to_string());

        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| plot_err(&e))?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .build_cartesian_2d(x_range, y_range)
            .map_err(|e| plot_err(&e))?;

        chart
            .draw_series(
                LineSeries::new(finite, BLUE.stroke_width(1)).point_size(self.marker_size),
            )
            .map_err(|e| plot_err(&e))?;

        root.present().map_err(|e| plot_err(&e))?;
        Ok(())
    }
}
