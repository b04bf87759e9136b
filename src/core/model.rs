// LogWise - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
// These types are the shared vocabulary across the filtering pipeline.

use chrono::NaiveDateTime;
use std::borrow::Cow;

// =============================================================================
// Timestamp
// =============================================================================

/// A naive local-clock timestamp: (year, month, day, hour, minute, second),
/// no timezone or offset. Equality and ordering are the plain field-tuple
/// comparison, which `NaiveDateTime` provides directly.
///
/// Values are only ever produced through calendar-validating constructors
/// (`NaiveDate::from_ymd_opt` + `and_hms_opt`), so an out-of-range component
/// such as February 31st can never become a `Timestamp`.
pub type Timestamp = NaiveDateTime;

// =============================================================================
// Log lines
// =============================================================================

/// One raw input line, with its 0-based position in the source.
///
/// The text is kept byte-for-byte as it appeared in the source (minus the
/// line terminator). No trimming is applied anywhere in the pipeline, so a
/// whitespace-sensitive consumer sees the log exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// 0-based position in the source content. Used to preserve original
    /// order through filtering; never re-derived after construction.
    pub index: usize,

    /// Raw line text without the trailing newline.
    pub text: String,
}

impl LogLine {
    /// Split decoded content into positioned lines.
    pub fn split_content(content: &str) -> Vec<LogLine> {
        content
            .lines()
            .enumerate()
            .map(|(index, text)| LogLine {
                index,
                text: text.to_string(),
            })
            .collect()
    }
}

/// Decode raw bytes as UTF-8, replacing undecodable sequences with U+FFFD.
///
/// Log files from embedded devices and mixed-locale hosts routinely contain
/// stray non-UTF-8 bytes; they must never abort parsing.
pub fn decode_content(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

// =============================================================================
// Per-line parse outcome
// =============================================================================

/// Classified outcome of parsing one line's timestamp.
///
/// The two absent cases are deliberately distinct so callers and tests can
/// tell "not this grammar" apart from "this grammar, but corrupt data".
/// Neither is an error: both simply exclude the line from the time index
/// and from every window match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineParse {
    /// The line matched the grammar and all components were in range.
    Timestamp(Timestamp),

    /// The line does not match the grammar's pattern.
    NoMatch,

    /// The pattern matched but a component was outside the calendar's
    /// valid range (unknown month name, February 31st, hour 27, ...).
    InvalidCalendar,
}

impl LineParse {
    /// The parsed timestamp, if the line produced one.
    pub fn timestamp(self) -> Option<Timestamp> {
        match self {
            Self::Timestamp(ts) => Some(ts),
            Self::NoMatch | Self::InvalidCalendar => None,
        }
    }
}
