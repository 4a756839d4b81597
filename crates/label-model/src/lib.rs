//! Posemetric Label Model
//!
//! Defines the data contracts for pose-estimation label files:
//! - **Detections:** One parsed label line (class, box, keypoints)
//! - **Frames:** Frame index recovery from label file names
//! - **Entries:** A label file's name and its decoded text, or why it could not be read
//! - **Rows:** The per-detection output record written to CSV
//!
//! Box and keypoint coordinates are normalized to `[0.0, 1.0]` relative to the
//! frame dimensions. Nothing here validates that range.

pub mod detection;
pub mod entry;
pub mod frame;
pub mod row;

pub use detection::*;
pub use entry::*;
pub use frame::*;
pub use row::*;
