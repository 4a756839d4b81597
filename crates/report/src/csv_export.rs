//! CSV serialization of output rows.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use posemetric_common::error::{PosemetricError, PosemetricResult};
use posemetric_label_model::row::{OutputRow, COLUMNS};

/// Write all rows to `path`, header first. The header is written even when
/// there are no rows. Failing to create or write the file is fatal.
pub fn write_csv(rows: &[OutputRow], path: &Path) -> PosemetricResult<()> {
    let file = File::create(path).map_err(|e| PosemetricError::output(path, e.to_string()))?;
    write_rows(rows, file).map_err(|e| PosemetricError::output(path, e.to_string()))?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "Wrote CSV");
    Ok(())
}

/// Serialize rows to any writer. Absent values become empty fields.
pub fn write_rows<W: Write>(rows: &[OutputRow], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(COLUMNS)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
