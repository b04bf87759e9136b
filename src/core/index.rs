// LogWise - core/index.rs
//
// Builds the selectable time index: every distinct timestamp observed in
// the file, ascending. This is the sequence presented to the operator to
// pick an anchor from.

use crate::core::grammar::Grammar;
use crate::core::model::{LogLine, Timestamp};
use crate::core::parser;
use std::collections::BTreeSet;

/// Parse every line and collect the distinct timestamps in ascending order.
///
/// Duplicates are discarded by full-tuple equality, so the result is
/// strictly increasing. Lines with no parseable timestamp contribute
/// nothing. An empty result means the file has no analyzable window; the
/// session layer surfaces that as a typed error.
pub fn build_time_index(lines: &[LogLine], grammar: &Grammar, year: i32) -> Vec<Timestamp> {
    let distinct: BTreeSet<Timestamp> = lines
        .iter()
        .filter_map(|line| parser::parse_line(&line.text, grammar, Some(year)).timestamp())
        .collect();

    tracing::debug!(
        grammar_id = %grammar.id,
        lines = lines.len(),
        distinct_times = distinct.len(),
        "Time index built"
    );

    distinct.into_iter().collect()
}
