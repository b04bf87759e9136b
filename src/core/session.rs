// LogWise - core/session.rs
//
// One filtering invocation: detect the file's grammar, fix the calendar
// year, build the selectable time index, then answer window queries.
// A session is derived, read-only state — nothing persists between runs,
// and two sessions over the same content are fully independent.

use crate::core::grammar::{self, Grammar};
use crate::core::index;
use crate::core::model::{LogLine, Timestamp};
use crate::core::window::{self, TimeWindow};
use crate::core::year;
use crate::util::error::{Result, SessionError};

/// An established filtering session over one block of log content.
///
/// Construction runs the full detection pipeline; afterwards the session
/// answers any number of window queries without re-detecting. The grammar
/// and year are fixed for the session's lifetime — one file, one notation,
/// one year.
#[derive(Debug, Clone)]
pub struct FilterSession {
    lines: Vec<LogLine>,
    grammar: Grammar,
    year: i32,
    event_times: Vec<Timestamp>,
}

impl FilterSession {
    /// Establish a session over decoded content.
    ///
    /// `now` is the injected current time used only as the last-resort
    /// year fallback; callers pass `chrono::Local::now().naive_local()` in
    /// production and a fixed value in tests.
    ///
    /// Fails with `EmptyTimeIndex` when no line in the content produced a
    /// timestamp: there is nothing to anchor a window on, and the caller
    /// must not attempt to build one.
    pub fn from_content(content: &str, registry: &[Grammar], now: Timestamp) -> Result<Self> {
        let lines = LogLine::split_content(content);
        let grammar = grammar::detect(&lines, registry)?.clone();
        let year = year::infer_year(&lines, &grammar, now);
        let event_times = index::build_time_index(&lines, &grammar, year);

        if event_times.is_empty() {
            return Err(SessionError::EmptyTimeIndex.into());
        }

        tracing::debug!(
            grammar_id = %grammar.id,
            year,
            lines = lines.len(),
            event_times = event_times.len(),
            "Filter session established"
        );

        Ok(Self {
            lines,
            grammar,
            year,
            event_times,
        })
    }

    /// The grammar that classified this file.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// The calendar year fixed for this file.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// All lines of the content, in original order.
    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    /// The distinct timestamps observed in the file, strictly ascending.
    /// The operator selects a window anchor from this sequence.
    pub fn event_times(&self) -> &[Timestamp] {
        &self.event_times
    }

    /// Lines whose timestamp falls inside the window, in original order.
    pub fn filter(&self, window: &TimeWindow) -> Vec<&LogLine> {
        window::filter_lines(&self.lines, &self.grammar, self.year, window)
            .into_iter()
            .map(|idx| &self.lines[idx])
            .collect()
    }

    /// The filtered lines joined by `\n`, exactly as they appeared in the
    /// source. This is the payload handed to the analysis collaborator.
    pub fn filtered_text(&self, window: &TimeWindow) -> String {
        let kept = self.filter(window);
        kept.iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
