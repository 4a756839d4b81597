//! Label file entries produced by source enumeration.

use std::string::FromUtf8Error;

/// Why a label file's text could not be obtained.
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// One label file from a directory or archive.
///
/// A read failure is carried in `text` rather than aborting enumeration, so
/// the consumer decides to skip the file and keep going.
#[derive(Debug)]
pub struct LabelEntry {
    /// File name within the directory, or member path within the archive.
    pub name: String,
    pub text: Result<String, EntryError>,
}

impl LabelEntry {
    pub fn new(name: impl Into<String>, text: Result<String, EntryError>) -> Self {
        Self {
            name: name.into(),
            text,
        }
    }

    /// Build an entry from raw bytes, decoding them as UTF-8.
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::new(name, String::from_utf8(bytes).map_err(EntryError::from))
    }
}

/// Whether a name carries the `.txt` label extension, ignoring case.
pub fn is_label_name(name: &str) -> bool {
    name.len() >= 4
        && name
            .get(name.len() - 4..)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(".txt"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_name_matching() {
        assert!(is_label_name("frame_001.txt"));
        assert!(is_label_name("FRAME_001.TXT"));
        assert!(is_label_name("a/b/c.Txt"));
        assert!(is_label_name(".txt"));
        assert!(!is_label_name("frame_001.txt.bak"));
        assert!(!is_label_name("txt"));
        assert!(!is_label_name("notes.md"));
    }

    #[test]
    fn test_from_bytes_decodes_utf8() {
        let entry = LabelEntry::from_bytes("a.txt", b"0 0.5 0.5 0.1 0.1\n".to_vec());
        assert_eq!(entry.text.unwrap(), "0 0.5 0.5 0.1 0.1\n");
    }

    #[test]
    fn test_from_bytes_rejects_invalid_utf8() {
        let entry = LabelEntry::from_bytes("bad.txt", vec![0xff, 0xfe, 0x00, 0x81]);
        assert!(matches!(entry.text, Err(EntryError::Utf8(_))));
    }
}
