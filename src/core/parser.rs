// LogWise - core/parser.rs
//
// Per-line timestamp extraction against a classified grammar.
// Parsing never fails loudly: every malformed line collapses to a
// classified `LineParse` outcome and the line is simply excluded
// downstream.

use crate::core::grammar::Grammar;
use crate::core::model::LineParse;
use chrono::NaiveDate;
use regex::Captures;

/// Standard three-letter month abbreviations, matched case-sensitively.
/// No locale handling: "SEP" and "sep" are corrupt data, not September.
const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn month_number(abbrev: &str) -> Option<u32> {
    MONTH_ABBREVS
        .iter()
        .position(|m| *m == abbrev)
        .map(|idx| idx as u32 + 1)
}

/// Parse one line's timestamp using the classified grammar.
///
/// `year` is the externally inferred calendar year, consulted only when the
/// grammar's notation omits the year (see `core::year`). Grammars that
/// embed the year ignore it.
///
/// Outcomes:
/// - the grammar's pattern does not match → `NoMatch`
/// - the pattern matches but a component is out of calendar range
///   (unknown month abbreviation, February 31st, minute 61) →
///   `InvalidCalendar`
/// - otherwise → `Timestamp`
pub fn parse_line(line: &str, grammar: &Grammar, year: Option<i32>) -> LineParse {
    let caps = match grammar.pattern.captures(line) {
        Some(caps) => caps,
        None => return LineParse::NoMatch,
    };

    let month = match caps.name("mon").and_then(|m| month_number(m.as_str())) {
        Some(month) => month,
        None => return LineParse::InvalidCalendar,
    };

    let (day, hour, minute, second) = match (
        numeric_field(&caps, "day"),
        numeric_field(&caps, "hour"),
        numeric_field(&caps, "min"),
        numeric_field(&caps, "sec"),
    ) {
        (Some(d), Some(h), Some(mi), Some(s)) => (d, h, mi, s),
        _ => return LineParse::InvalidCalendar,
    };

    // Grammars with an embedded year always win over the external one.
    let year = match caps.name("year") {
        Some(y) => match y.as_str().parse::<i32>() {
            Ok(y) => y,
            Err(_) => return LineParse::InvalidCalendar,
        },
        None => match year {
            Some(y) => y,
            // The caller is expected to supply a year for year-less
            // grammars; without one the line cannot be placed in time.
            None => return LineParse::NoMatch,
        },
    };

    match NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
    {
        Some(ts) => LineParse::Timestamp(ts),
        None => LineParse::InvalidCalendar,
    }
}

fn numeric_field(caps: &Captures<'_>, name: &str) -> Option<u32> {
    caps.name(name).and_then(|m| m.as_str().parse().ok())
}
