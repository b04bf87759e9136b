// LogWise - core/window.rs
//
// Time-window construction and the window scan.
//
// Historically the two construction modes disagreed on the upper bound:
// duration mode was [start, end) while offset mode was [start, end]. The
// exclusive upper bound silently dropped any line whose timestamp equalled
// the window's end, so both modes are now inclusive at both ends. The
// inclusivity flags stay on the struct to keep the policy explicit data
// rather than an implicit convention.

use crate::core::grammar::Grammar;
use crate::core::model::{LogLine, Timestamp};
use crate::core::offset::Offset;
use crate::core::parser;
use chrono::Duration;

/// A timestamp range with explicit bound inclusivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: Timestamp,
    pub end: Timestamp,
    pub start_inclusive: bool,
    pub end_inclusive: bool,
}

impl TimeWindow {
    /// Duration mode: the window covers `[anchor, anchor + duration]`.
    pub fn from_duration(anchor: Timestamp, duration: Duration) -> Self {
        Self {
            start: anchor,
            end: anchor + duration,
            start_inclusive: true,
            end_inclusive: true,
        }
    }

    /// Offset mode: the window covers `[anchor - before, anchor + after]`.
    ///
    /// Offsets are capped at a year (see `core::offset`), so the bound
    /// arithmetic stays inside `chrono`'s representable range for any
    /// timestamp a grammar can produce.
    pub fn around(anchor: Timestamp, before: Offset, after: Offset) -> Self {
        Self {
            start: anchor - before.to_duration(),
            end: anchor + after.to_duration(),
            start_inclusive: true,
            end_inclusive: true,
        }
    }

    /// Whether a timestamp falls inside the window per the bound flags.
    pub fn contains(&self, ts: Timestamp) -> bool {
        let after_start = if self.start_inclusive {
            ts >= self.start
        } else {
            ts > self.start
        };
        let before_end = if self.end_inclusive {
            ts <= self.end
        } else {
            ts < self.end
        };
        after_start && before_end
    }
}

/// Scan all lines in original order and keep those whose timestamp falls
/// inside the window.
///
/// Returns indices into `lines`, in their original order — never
/// re-sorted. Lines with no parseable timestamp never match. A window that
/// matches nothing is a normal result, logged as a warning so the operator
/// can widen the window.
pub fn filter_lines(
    lines: &[LogLine],
    grammar: &Grammar,
    year: i32,
    window: &TimeWindow,
) -> Vec<usize> {
    let kept: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| {
            parser::parse_line(&line.text, grammar, Some(year))
                .timestamp()
                .is_some_and(|ts| window.contains(ts))
        })
        .map(|(idx, _)| idx)
        .collect();

    if kept.is_empty() {
        tracing::warn!(
            start = %window.start,
            end = %window.end,
            "No lines matched the selected time window"
        );
    } else {
        tracing::debug!(
            start = %window.start,
            end = %window.end,
            kept = kept.len(),
            scanned = lines.len(),
            "Window scan complete"
        );
    }

    kept
}
