//! Label files directly inside a directory.

use std::path::{Path, PathBuf};

use posemetric_common::error::{PosemetricError, PosemetricResult};
use posemetric_label_model::entry::{is_label_name, EntryError, LabelEntry};

use crate::{LabelSource, SourceKind};

/// Reads `*.txt` files from one directory, lexicographically by name.
///
/// Only the listing happens up front. Each file is opened, read and closed
/// when the iterator reaches it.
pub struct DirectorySource {
    root: PathBuf,
    pending: std::vec::IntoIter<(String, PathBuf)>,
}

impl DirectorySource {
    pub fn open(root: impl Into<PathBuf>) -> PosemetricResult<Self> {
        let root = root.into();
        let listing = std::fs::read_dir(&root).map_err(|e| {
            PosemetricError::label_source(format!(
                "Failed to list labels dir {}: {e}",
                root.display()
            ))
        })?;

        let mut files = Vec::new();
        for dirent in listing {
            let dirent = match dirent {
                Ok(dirent) => dirent,
                Err(e) => {
                    tracing::warn!(dir = %root.display(), error = %e, "Skipping unreadable directory entry");
                    continue;
                }
            };
            let name = dirent.file_name().to_string_lossy().into_owned();
            if is_label_name(&name) {
                files.push((name, dirent.path()));
            }
        }
        files.sort_by(|a, b| a.0.cmp(&b.0));

        tracing::debug!(dir = %root.display(), files = files.len(), "Listed label files");

        Ok(Self {
            root,
            pending: files.into_iter(),
        })
    }

    /// Number of label files not yet yielded.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl Iterator for DirectorySource {
    type Item = LabelEntry;

    fn next(&mut self) -> Option<LabelEntry> {
        let (name, path) = self.pending.next()?;
        let entry = match std::fs::read(&path) {
            Ok(bytes) => LabelEntry::from_bytes(name, bytes),
            Err(e) => LabelEntry::new(name, Err(EntryError::Io(e))),
        };
        Some(entry)
    }
}

impl LabelSource for DirectorySource {
    fn kind(&self) -> SourceKind {
        SourceKind::Directory
    }

    fn origin(&self) -> &Path {
        &self.root
    }
}
