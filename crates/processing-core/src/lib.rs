//! Posemetric Processing Core
//!
//! Turns parsed label lines into output rows:
//! - **Metric:** Denormalize nose/mouth keypoints and measure their distance
//! - **Assemble:** Combine a detection, its frame index and the metric into a row
//! - **Batch:** Fold the label files of a source into rows, skipping bad files
//!
//! This crate is pure computation: no I/O, no platform dependencies.
//! All inputs are data; all outputs are data.

pub mod assemble;
pub mod batch;
pub mod metric;

pub use assemble::{rows_for_file, FileRows};
pub use batch::{BatchStats, RowCollector};
pub use metric::{NoseMouthMetric, PixelPoint};
