// LogWise - core/year.rs
//
// Calendar-year inference for a classified file. The "current time" is
// injected by the caller so inference stays pure and deterministic; this
// module never reads the wall clock.

use crate::core::grammar::Grammar;
use crate::core::model::{LogLine, Timestamp};
use crate::core::parser;
use chrono::Datelike;
use regex::Regex;
use std::sync::OnceLock;

/// A 4-digit year immediately followed by a date separator, e.g. "2025-"
/// in an ISO date embedded somewhere in the content. Year-less syslog
/// files frequently carry one in a boot banner or an application line.
fn year_token() -> &'static Regex {
    static YEAR_TOKEN: OnceLock<Regex> = OnceLock::new();
    YEAR_TOKEN.get_or_init(|| Regex::new(r"(\d{4})[-/]").expect("year token regex"))
}

/// Determine the calendar year to use for every line of a file.
///
/// - Grammars that embed the year: parse every line and take the earliest
///   observed year. The file's nominal year is the earliest evidence, not
///   necessarily the first line's.
/// - Year-less grammars: the first `YYYY-` or `YYYY/` token found in the
///   content, scanning lines in order.
/// - Otherwise: the year of the injected `now`.
pub fn infer_year(lines: &[LogLine], grammar: &Grammar, now: Timestamp) -> i32 {
    let year = if grammar.requires_year {
        lines
            .iter()
            .find_map(|line| year_token().captures(&line.text))
            .and_then(|caps| caps[1].parse::<i32>().ok())
            .unwrap_or_else(|| now.year())
    } else {
        lines
            .iter()
            .filter_map(|line| parse_line_year(line, grammar))
            .min()
            .unwrap_or_else(|| now.year())
    };

    tracing::debug!(grammar_id = %grammar.id, year, "Inferred calendar year");
    year
}

fn parse_line_year(line: &LogLine, grammar: &Grammar) -> Option<i32> {
    parser::parse_line(&line.text, grammar, None)
        .timestamp()
        .map(|ts| ts.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grammar::load_builtin_grammars;
    use chrono::NaiveDate;

    fn grammar(id: &str) -> Grammar {
        load_builtin_grammars()
            .into_iter()
            .find(|g| g.id == id)
            .expect("built-in grammar")
    }

    fn lines(texts: &[&str]) -> Vec<LogLine> {
        texts
            .iter()
            .enumerate()
            .map(|(index, t)| LogLine {
                index,
                text: t.to_string(),
            })
            .collect()
    }

    fn now(year: i32) -> Timestamp {
        NaiveDate::from_ymd_opt(year, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_embedded_year_takes_earliest_observed() {
        let content = lines(&[
            "[Tue Sep  9 13:12:40 2025] later boot",
            "[Mon Mar  4 08:00:00 2024] earlier boot",
            "not a log line",
        ]);
        assert_eq!(infer_year(&content, &grammar("bracketed"), now(2030)), 2024);
    }

    #[test]
    fn test_embedded_year_falls_back_to_clock_when_nothing_parses() {
        let content = lines(&["no timestamps", "at all"]);
        assert_eq!(infer_year(&content, &grammar("bracketed"), now(2030)), 2030);
    }

    #[test]
    fn test_traditional_year_from_dashed_token() {
        let content = lines(&[
            "Sep  9 13:12:42 host app[2]: build 2023-11-02 deployed",
            "Sep  9 13:12:43 host app[2]: started",
        ]);
        assert_eq!(
            infer_year(&content, &grammar("traditional"), now(2030)),
            2023
        );
    }

    #[test]
    fn test_traditional_year_from_slashed_token() {
        let content = lines(&["Sep  9 13:12:42 host app[2]: licence until 2026/01/01"]);
        assert_eq!(
            infer_year(&content, &grammar("traditional"), now(2030)),
            2026
        );
    }

    #[test]
    fn test_traditional_bare_year_without_separator_is_ignored() {
        // "2027" with no trailing - or / is not a date token.
        let content = lines(&["Sep  9 13:12:42 host app[2]: error code 2027 raised"]);
        assert_eq!(
            infer_year(&content, &grammar("traditional"), now(2030)),
            2030
        );
    }

    #[test]
    fn test_traditional_falls_back_to_injected_clock() {
        let content = lines(&[
            "Sep  9 13:12:42 host sshd[1]: accepted",
            "Sep  9 13:12:43 host sshd[1]: session opened",
        ]);
        assert_eq!(
            infer_year(&content, &grammar("traditional"), now(2030)),
            2030
        );
    }
}
