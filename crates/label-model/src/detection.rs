//! Detection records parsed from YOLO-Pose style label lines.
//!
//! A label line is whitespace separated: `class cx cy w h [keypoints...]`.
//! The keypoint tail carries either `x y conf` triplets or bare `x y` pairs,
//! and the detector does not say which. The layout is inferred from the
//! number of trailing values, see [`KeypointLayout::for_remainder`].

/// Minimum token count for a line to describe a detection (class + box).
pub const MIN_TOKENS: usize = 5;

/// Axis-aligned bounding box in normalized coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

/// A single landmark in normalized coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keypoint {
    pub x: f64,
    pub y: f64,
    /// Present only when the line carried `x y conf` triplets.
    pub confidence: Option<f64>,
}

/// One detected subject from one label line.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionRecord {
    pub class_id: i64,
    pub bbox: BoundingBox,
    pub keypoints: Vec<Keypoint>,
}

impl DetectionRecord {
    /// First keypoint, the nose in the face keypoint ordering.
    pub fn nose(&self) -> Option<&Keypoint> {
        self.keypoints.first()
    }

    /// Second keypoint, the mouth in the face keypoint ordering.
    pub fn mouth(&self) -> Option<&Keypoint> {
        self.keypoints.get(1)
    }
}

/// How the values after the bounding box are grouped into keypoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypointLayout {
    /// No trailing values.
    Empty,
    /// `x y conf` triplets.
    Triplets,
    /// `x y` pairs, no confidence.
    Pairs,
    /// Odd count that is not a multiple of three: `x y` pairs from the
    /// start, the final unpaired value is discarded.
    PairsDropLast,
}

type LayoutRule = (fn(usize) -> bool, KeypointLayout);

/// Evaluated top to bottom; the first matching rule wins.
const LAYOUT_RULES: [LayoutRule; 4] = [
    (is_empty, KeypointLayout::Empty),
    (is_multiple_of_three, KeypointLayout::Triplets),
    (is_multiple_of_two, KeypointLayout::Pairs),
    (always, KeypointLayout::PairsDropLast),
];

fn is_empty(len: usize) -> bool {
    len == 0
}

fn is_multiple_of_three(len: usize) -> bool {
    len % 3 == 0
}

fn is_multiple_of_two(len: usize) -> bool {
    len % 2 == 0
}

fn always(_: usize) -> bool {
    true
}

impl KeypointLayout {
    /// Pick the layout for `len` trailing values.
    ///
    /// A count divisible by both 2 and 3 is read as triplets.
    pub fn for_remainder(len: usize) -> Self {
        LAYOUT_RULES
            .iter()
            .find(|(matches, _)| matches(len))
            .map(|(_, layout)| *layout)
            .unwrap_or(KeypointLayout::PairsDropLast)
    }

    /// Group trailing values into keypoints according to this layout.
    pub fn group(self, values: &[f64]) -> Vec<Keypoint> {
        match self {
            KeypointLayout::Empty => Vec::new(),
            KeypointLayout::Triplets => values
                .chunks_exact(3)
                .map(|c| Keypoint {
                    x: c[0],
                    y: c[1],
                    confidence: Some(c[2]),
                })
                .collect(),
            KeypointLayout::Pairs | KeypointLayout::PairsDropLast => values
                .chunks_exact(2)
                .map(|c| Keypoint {
                    x: c[0],
                    y: c[1],
                    confidence: None,
                })
                .collect(),
        }
    }
}

/// Why a line did not produce a detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("expected at least 5 tokens, found {found}")]
    TooFewTokens { found: usize },

    #[error("token {index} is not a number")]
    NonNumericToken { index: usize },

    #[error("class id is not a finite number")]
    InvalidClassId,
}

/// Outcome of parsing one label line.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    Parsed(DetectionRecord),
    Skipped(SkipReason),
}

impl ParsedLine {
    pub fn record(&self) -> Option<&DetectionRecord> {
        match self {
            ParsedLine::Parsed(record) => Some(record),
            ParsedLine::Skipped(_) => None,
        }
    }

    pub fn into_record(self) -> Option<DetectionRecord> {
        match self {
            ParsedLine::Parsed(record) => Some(record),
            ParsedLine::Skipped(_) => None,
        }
    }
}

/// Parse one label line. Never fails; malformed lines come back as
/// [`ParsedLine::Skipped`].
pub fn parse_line(line: &str) -> ParsedLine {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < MIN_TOKENS {
        return ParsedLine::Skipped(SkipReason::TooFewTokens {
            found: tokens.len(),
        });
    }

    let mut values = Vec::with_capacity(tokens.len());
    for (index, token) in tokens.iter().enumerate() {
        match token.parse::<f64>() {
            Ok(value) => values.push(value),
            Err(_) => return ParsedLine::Skipped(SkipReason::NonNumericToken { index }),
        }
    }

    if !values[0].is_finite() {
        return ParsedLine::Skipped(SkipReason::InvalidClassId);
    }
    // Truncates toward zero; saturates for out-of-range ids.
    let class_id = values[0].trunc() as i64;

    let bbox = BoundingBox {
        center_x: values[1],
        center_y: values[2],
        width: values[3],
        height: values[4],
    };

    let rem = &values[MIN_TOKENS..];
    let keypoints = KeypointLayout::for_remainder(rem.len()).group(rem);

    ParsedLine::Parsed(DetectionRecord {
        class_id,
        bbox,
        keypoints,
    })
}

/// Characters that end a label line. Besides `\n` this covers bare `\r`
/// (classic Mac line endings) and the other Unicode line boundaries.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split label text into lines on any of [`LINE_BREAKS`], treating `\r\n`
/// as a single break. Like [`str::lines`], a final terminator does not
/// produce a trailing empty line.
pub fn label_lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let s = rest?;
        let Some(at) = s.find(&LINE_BREAKS[..]) else {
            rest = None;
            return (!s.is_empty()).then_some(s);
        };
        let tail = &s[at..];
        let break_len = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = Some(&tail[break_len..]);
        Some(&s[..at])
    })
}

/// Parse every non-blank line of a label file, in order.
pub fn parse_label_text(text: &str) -> impl Iterator<Item = ParsedLine> + '_ {
    label_lines(text)
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
}
