//! Posemetric Report
//!
//! Final stage of the pipeline, after every source has been consumed:
//!
//! ```text
//! rows ──┬── CSV writer ──────────► dists.csv
//!        │
//!        └── time series (d_px) ──► plot renderer ──► dists.png (optional)
//! ```
//!
//! The CSV is the product. The plot is diagnostic: its renderer is optional
//! (the `plot` feature) and its failures are reported, never propagated.

pub mod csv_export;
pub mod plot;

pub use csv_export::*;
pub use plot::*;
