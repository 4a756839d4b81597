//! Batch collection of rows across the label files of a source.

use std::ops::AddAssign;

use posemetric_common::config::FrameGeometry;
use posemetric_label_model::entry::LabelEntry;
use posemetric_label_model::row::OutputRow;

use crate::assemble::rows_for_file;

/// Counters for one source, or for a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Label files whose text was read and parsed.
    pub files_read: usize,
    /// Label files skipped because they could not be read or decoded.
    pub files_skipped: usize,
    /// Non-blank lines rejected by the parser.
    pub lines_skipped: usize,
    /// Rows produced.
    pub rows: usize,
}

impl AddAssign for BatchStats {
    fn add_assign(&mut self, other: Self) {
        self.files_read += other.files_read;
        self.files_skipped += other.files_skipped;
        self.lines_skipped += other.lines_skipped;
        self.rows += other.rows;
    }
}

/// Accumulates rows from any number of sources, in the order they are fed.
#[derive(Debug)]
pub struct RowCollector {
    geometry: FrameGeometry,
    rows: Vec<OutputRow>,
    totals: BatchStats,
}

impl RowCollector {
    pub fn new(geometry: FrameGeometry) -> Self {
        Self {
            geometry,
            rows: Vec::new(),
            totals: BatchStats::default(),
        }
    }

    /// Append the rows of every entry, in iteration order. An entry whose
    /// text failed to load contributes nothing and is counted as skipped.
    /// Returns the counters for these entries alone.
    pub fn collect<I>(&mut self, entries: I) -> BatchStats
    where
        I: IntoIterator<Item = LabelEntry>,
    {
        let mut stats = BatchStats::default();

        for entry in entries {
            let text = match entry.text {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(file = %entry.name, error = %e, "Skipping unreadable label file");
                    stats.files_skipped += 1;
                    continue;
                }
            };

            let file_rows = rows_for_file(&entry.name, &text, &self.geometry);
            stats.files_read += 1;
            stats.lines_skipped += file_rows.skipped_lines;
            stats.rows += file_rows.rows.len();
            self.rows.extend(file_rows.rows);
        }

        tracing::debug!(
            files_read = stats.files_read,
            files_skipped = stats.files_skipped,
            lines_skipped = stats.lines_skipped,
            rows = stats.rows,
            "Collected label rows"
        );

        self.totals += stats;
        stats
    }

    pub fn rows(&self) -> &[OutputRow] {
        &self.rows
    }

    pub fn totals(&self) -> BatchStats {
        self.totals
    }

    pub fn into_rows(self) -> Vec<OutputRow> {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use posemetric_label_model::entry::EntryError;

    fn ok(name: &str, text: &str) -> LabelEntry {
        LabelEntry::new(name, Ok(text.to_string()))
    }

    #[test]
    fn test_unreadable_entry_is_skipped() {
        let mut collector = RowCollector::new(FrameGeometry::default());
        let stats = collector.collect(vec![
            ok("a_1.txt", "0 0.5 0.5 0.1 0.1\n"),
            LabelEntry::new(
                "b_2.txt",
                Err(EntryError::Io(std::io::Error::other("truncated"))),
            ),
            ok("c_3.txt", "0 0.5 0.5 0.1 0.1\n0 0.5 0.5 0.1 0.1\n"),
        ]);

        assert_eq!(
            stats,
            BatchStats {
                files_read: 2,
                files_skipped: 1,
                lines_skipped: 0,
                rows: 3,
            }
        );
        let names: Vec<&str> = collector.rows().iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["a_1.txt", "c_3.txt", "c_3.txt"]);
    }

    #[test]
    fn test_sources_append_in_feed_order() {
        let mut collector = RowCollector::new(FrameGeometry::default());
        collector.collect(vec![ok("z_9.txt", "0 0.5 0.5 0.1 0.1\n")]);
        let second = collector.collect(vec![
            ok("a_1.txt", "0 0.5 0.5 0.1 0.1\nx\n"),
            ok("empty_2.txt", ""),
        ]);

        assert_eq!(second.rows, 1);
        assert_eq!(second.lines_skipped, 1);
        assert_eq!(second.files_read, 2);

        let totals = collector.totals();
        assert_eq!(totals.rows, 2);
        assert_eq!(totals.files_read, 3);

        let rows = collector.into_rows();
        assert_eq!(rows[0].filename, "z_9.txt");
        assert_eq!(rows[1].filename, "a_1.txt");
    }
}
