//! Posemetric Label Source
//!
//! Enumerates label files from the places detectors leave them:
//!
//! - **Directory:** `*.txt` files directly inside a labels directory
//! - **Archive:** `*.txt` members of a `.tar.gz` bundle
//!
//! Both yield [`LabelEntry`] values sorted by name. A file that cannot be
//! read or decoded is still yielded, with the failure in its `text`, so the
//! caller can skip it without stopping the batch.

pub mod archive;
pub mod directory;

use std::fmt;
use std::path::{Path, PathBuf};

use posemetric_common::error::PosemetricResult;
use posemetric_label_model::entry::LabelEntry;

pub use archive::ArchiveSource;
pub use directory::DirectorySource;

/// Where a source reads its label files from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Directory,
    Archive,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Directory => f.write_str("labels dir"),
            SourceKind::Archive => f.write_str("archive"),
        }
    }
}

/// An opened source of label files, iterated in name order.
pub trait LabelSource: Iterator<Item = LabelEntry> {
    fn kind(&self) -> SourceKind;

    /// Directory or archive path this source reads from.
    fn origin(&self) -> &Path;
}

/// A source named on the command line, not yet opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    pub kind: SourceKind,
    pub path: PathBuf,
}

impl SourceSpec {
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: SourceKind::Directory,
            path: path.into(),
        }
    }

    pub fn archive(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: SourceKind::Archive,
            path: path.into(),
        }
    }

    /// Open the source. Failing to list a directory or to open an archive
    /// is fatal for the run.
    pub fn open(&self) -> PosemetricResult<Box<dyn LabelSource>> {
        match self.kind {
            SourceKind::Directory => Ok(Box::new(DirectorySource::open(&self.path)?)),
            SourceKind::Archive => Ok(Box::new(ArchiveSource::open(&self.path)?)),
        }
    }
}

/// Order sources for processing: the labels directory first, then each
/// archive in the order given.
pub fn plan_sources(labels_dir: Option<&Path>, archives: &[PathBuf]) -> Vec<SourceSpec> {
    labels_dir
        .map(SourceSpec::directory)
        .into_iter()
        .chain(archives.iter().map(SourceSpec::archive))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_puts_directory_first() {
        let archives = vec![PathBuf::from("b.tar.gz"), PathBuf::from("a.tar.gz")];
        let plan = plan_sources(Some(Path::new("labels")), &archives);
        assert_eq!(
            plan,
            vec![
                SourceSpec::directory("labels"),
                SourceSpec::archive("b.tar.gz"),
                SourceSpec::archive("a.tar.gz"),
            ]
        );
    }

    #[test]
    fn test_plan_without_directory() {
        let plan = plan_sources(None, &[PathBuf::from("x.tar.gz")]);
        assert_eq!(plan, vec![SourceSpec::archive("x.tar.gz")]);
        assert!(plan_sources(None, &[]).is_empty());
    }

    #[test]
    fn test_open_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let spec = SourceSpec::directory(dir.path().join("absent"));
        assert!(spec.open().is_err());
    }

    #[test]
    fn test_open_missing_archive_fails() {
        let dir = tempfile::tempdir().unwrap();
        let spec = SourceSpec::archive(dir.path().join("absent.tar.gz"));
        assert!(spec.open().is_err());
    }
}
