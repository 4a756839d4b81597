//! Frame index recovery from label file names.
//!
//! Detectors number their label files per frame, but the naming varies:
//! `video_00042.txt`, `clip_7.txt`, `frame123.txt`. Two rules are tried in
//! order:
//!
//! 1. a digit run immediately before a lowercase `.txt` suffix;
//! 2. the last `_`-separated segment of the extension-less name, if it is
//!    all digits.

use std::sync::OnceLock;

use regex::Regex;

fn trailing_digits_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([0-9]+)\.txt$").expect("frame pattern is valid"))
}

/// Final path component of a file name or archive member name.
pub fn basename(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

/// Derive the frame index from a label file name. Returns `None` when
/// neither naming rule applies or the digits do not fit in a `u64`.
pub fn frame_index(name: &str) -> Option<u64> {
    let base = basename(name);

    if let Some(frame) = trailing_digits_re()
        .captures(base)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u64>().ok())
    {
        return Some(frame);
    }

    let stem = base.rsplit_once('.').map_or(base, |(stem, _)| stem);
    let last = stem.rsplit('_').next()?;
    if !last.is_empty() && last.bytes().all(|b| b.is_ascii_digit()) {
        return last.parse().ok();
    }

    None
}
