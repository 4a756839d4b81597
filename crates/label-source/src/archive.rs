//! Label files packed in a gzip-compressed tar archive.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use tar::EntryType;

use posemetric_common::error::{PosemetricError, PosemetricResult};
use posemetric_label_model::entry::{is_label_name, EntryError, LabelEntry};

use crate::{LabelSource, SourceKind};

/// Reads `*.txt` regular-file members of a `.tar.gz`, sorted by member name.
/// Concatenated gzip members are read as one stream.
///
/// A tar stream can only be walked front to back, so matching members are
/// read into memory while opening and yielded in sorted order afterwards.
pub struct ArchiveSource {
    path: PathBuf,
    members: std::vec::IntoIter<LabelEntry>,
}

impl ArchiveSource {
    /// Open and scan the archive.
    ///
    /// Fails if the file cannot be opened or the stream is unreadable before
    /// the first member. A stream that breaks later keeps the members read so
    /// far and logs a warning.
    pub fn open(path: impl Into<PathBuf>) -> PosemetricResult<Self> {
        let path = path.into();
        let file = File::open(&path).map_err(|e| PosemetricError::archive(&path, e.to_string()))?;
        let mut archive = tar::Archive::new(MultiGzDecoder::new(BufReader::new(file)));
        let entries = archive
            .entries()
            .map_err(|e| PosemetricError::archive(&path, e.to_string()))?;

        let mut members = Vec::new();
        let mut scanned = 0usize;
        for item in entries {
            let mut entry = match item {
                Ok(entry) => entry,
                Err(e) if scanned == 0 => {
                    return Err(PosemetricError::archive(&path, e.to_string()));
                }
                Err(e) => {
                    tracing::warn!(
                        archive = %path.display(),
                        scanned,
                        error = %e,
                        "Archive stream ended early, keeping members read so far"
                    );
                    break;
                }
            };
            scanned += 1;

            if !matches!(
                entry.header().entry_type(),
                EntryType::Regular | EntryType::Continuous
            ) {
                continue;
            }
            let name = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
            if !is_label_name(&name) {
                continue;
            }

            let mut bytes = Vec::new();
            let member = match entry.read_to_end(&mut bytes) {
                Ok(_) => LabelEntry::from_bytes(name, bytes),
                Err(e) => LabelEntry::new(name, Err(EntryError::Io(e))),
            };
            members.push(member);
        }

        // Stable, so duplicate member names keep archive order.
        members.sort_by(|a, b| a.name.cmp(&b.name));

        tracing::debug!(
            archive = %path.display(),
            scanned,
            labels = members.len(),
            "Scanned archive"
        );

        Ok(Self {
            path,
            members: members.into_iter(),
        })
    }

    /// Number of label members not yet yielded.
    pub fn remaining(&self) -> usize {
        self.members.len()
    }
}

impl Iterator for ArchiveSource {
    type Item = LabelEntry;

    fn next(&mut self) -> Option<LabelEntry> {
        self.members.next()
    }
}

impl LabelSource for ArchiveSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Archive
    }

    fn origin(&self) -> &Path {
        &self.path
    }
}
