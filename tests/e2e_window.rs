// LogWise - tests/e2e_window.rs
//
// End-to-end tests for the filtering pipeline: raw bytes on disk through
// decoding, grammar detection, year inference, index building, window
// filtering, and hand-off to an analysis sink. Real files, real built-in
// grammars, no mocks below the analysis boundary.

use logwise::core::analysis::{AnalysisError, AnalysisReport, AnalysisSink};
use logwise::core::grammar::{load_builtin_grammars, Grammar};
use logwise::core::model::{decode_content, Timestamp};
use logwise::core::offset::Offset;
use logwise::core::session::FilterSession;
use logwise::core::window::TimeWindow;
use chrono::{Duration, NaiveDate};
use std::cell::RefCell;
use std::fs;

// =============================================================================
// Helpers
// =============================================================================

fn registry() -> Vec<Grammar> {
    load_builtin_grammars()
}

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Timestamp {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

fn fixed_now() -> Timestamp {
    ts(2030, 6, 15, 12, 0, 0)
}

/// Write bytes to a temp file and run the full decode-and-establish path.
fn session_from_disk(bytes: &[u8]) -> FilterSession {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.log");
    fs::write(&path, bytes).unwrap();

    let raw = fs::read(&path).unwrap();
    let content = decode_content(&raw);
    FilterSession::from_content(&content, &registry(), fixed_now()).unwrap()
}

/// Records every submission it receives.
struct RecordingSink {
    submissions: RefCell<Vec<String>>,
}

impl RecordingSink {
    fn new() -> Self {
        Self {
            submissions: RefCell::new(Vec::new()),
        }
    }
}

impl AnalysisSink for RecordingSink {
    fn submit_for_analysis(&self, text: &str) -> Result<AnalysisReport, AnalysisError> {
        self.submissions.borrow_mut().push(text.to_string());
        Ok(AnalysisReport {
            analysis: "root cause: disk full".to_string(),
            completed_at: fixed_now(),
        })
    }
}

// =============================================================================
// Traditional syslog end to end
// =============================================================================

#[test]
fn e2e_traditional_syslog_offset_window() {
    let content = b"Sep  9 13:05:00 web01 systemd[1]: Started nginx\n\
                    Sep  9 13:10:00 web01 kernel: Out of memory: Kill process 4242\n\
                    Sep  9 13:10:30 web01 kernel: Killed process 4242 (nginx)\n\
                    -- rotation marker, no timestamp --\n\
                    Sep  9 13:25:00 web01 systemd[1]: Started nginx\n";
    let session = session_from_disk(content);

    assert_eq!(session.grammar().id, "traditional");
    // No YYYY-/YYYY/ token: the injected clock's year is used.
    assert_eq!(session.year(), 2030);
    assert_eq!(session.event_times().len(), 4);

    // Operator picks the OOM kill as the anchor, 5 minutes either side.
    let window = TimeWindow::around(
        ts(2030, 9, 9, 13, 10, 0),
        Offset::parse("5m").unwrap(),
        Offset::parse("5m").unwrap(),
    );
    let kept = session.filter(&window);

    assert_eq!(kept.len(), 3);
    assert!(kept[0].text.contains("Started nginx"));
    assert!(kept[1].text.contains("Out of memory"));
    assert!(kept[2].text.contains("Killed process"));
    // Original positions survive filtering.
    assert_eq!(
        kept.iter().map(|l| l.index).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
}

#[test]
fn e2e_traditional_year_token_overrides_clock() {
    let content = b"Sep  9 13:10:00 web01 app[7]: release 2024-08-30 deployed\n\
                    Sep  9 13:11:00 web01 app[7]: started\n";
    let session = session_from_disk(content);

    assert_eq!(session.year(), 2024);
    assert_eq!(
        session.event_times()[0],
        ts(2024, 9, 9, 13, 10, 0),
        "the YYYY- token in the content fixes the year"
    );
}

// =============================================================================
// Bracketed dmesg end to end
// =============================================================================

#[test]
fn e2e_bracketed_duration_window_keeps_boundary_line() {
    let content = b"[Tue Sep 9 13:12:40 2025] a\n\
                    [Tue Sep 9 13:12:42 2025] b\n\
                    not a log line\n";
    let session = session_from_disk(content);

    assert_eq!(session.year(), 2025);

    let window = TimeWindow::from_duration(ts(2025, 9, 9, 13, 12, 42), Duration::minutes(1));
    let kept = session.filter(&window);

    // The line equal to the window start is kept; the earlier line and the
    // unparseable line are excluded.
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].text, "[Tue Sep 9 13:12:42 2025] b");
}

#[test]
fn e2e_bracketed_year_is_earliest_observed() {
    let content = b"[Tue Sep  9 13:12:40 2025] current boot\n\
                    [Mon Mar  4 08:00:00 2024] stale ring-buffer entry\n";
    let session = session_from_disk(content);
    assert_eq!(session.year(), 2024);
}

// =============================================================================
// Robustness
// =============================================================================

#[test]
fn e2e_invalid_utf8_is_replaced_not_fatal() {
    let mut content: Vec<u8> = b"Sep  9 13:10:00 web01 tty[3]: garbled ".to_vec();
    content.extend_from_slice(&[0xff, 0xfe, 0x80]);
    content.extend_from_slice(b" payload\nSep  9 13:10:05 web01 tty[3]: recovered\n");

    let session = session_from_disk(&content);
    assert_eq!(session.event_times().len(), 2);

    let window = TimeWindow::from_duration(ts(2030, 9, 9, 13, 10, 0), Duration::minutes(1));
    let kept = session.filter(&window);
    assert_eq!(kept.len(), 2);
    assert!(
        kept[0].text.contains('\u{FFFD}'),
        "undecodable bytes become replacement markers"
    );
}

#[test]
fn e2e_file_without_timestamps_yields_empty_index_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "shopping list\n- milk\n- eggs\n").unwrap();

    let raw = fs::read(&path).unwrap();
    let content = decode_content(&raw);
    let result = FilterSession::from_content(&content, &registry(), fixed_now());

    assert!(result.is_err(), "no analyzable timestamps must be surfaced");
}

// =============================================================================
// Analysis hand-off
// =============================================================================

#[test]
fn e2e_filtered_text_flows_to_analysis_sink() {
    let content = b"[Tue Sep 9 13:12:40 2025] a\n\
                    [Tue Sep 9 13:12:42 2025] b\n";
    let session = session_from_disk(content);

    let window = TimeWindow::from_duration(ts(2025, 9, 9, 13, 12, 42), Duration::minutes(1));
    let payload = session.filtered_text(&window);

    let sink = RecordingSink::new();
    let report = sink.submit_for_analysis(&payload).unwrap();

    assert_eq!(report.analysis, "root cause: disk full");
    assert_eq!(
        sink.submissions.borrow().as_slice(),
        &["[Tue Sep 9 13:12:42 2025] b".to_string()],
        "the sink receives exactly the filtered excerpt, untrimmed"
    );
}
