// Integration tests for cli/report.rs: the four output shapes and their
// exact spacing.

use ccwc::cli::metric::Metric;
use ccwc::cli::report::format_report;
use ccwc::{count, CountResult};

#[test]
fn file_report_with_a_single_metric() {
    let counts = count(b"hello world\nfoo\n");
    assert_eq!(
        format_report(&counts, Some(Metric::Lines), Some("test.txt")),
        "2 test.txt"
    );
    assert_eq!(
        format_report(&counts, Some(Metric::Bytes), Some("test.txt")),
        "16 test.txt"
    );
}

#[test]
fn file_report_without_a_metric_lists_lines_words_bytes() {
    let counts = count(b"hello world\nfoo\n");
    assert_eq!(
        format_report(&counts, None, Some("test.txt")),
        "2 3 16 test.txt"
    );
}

#[test]
fn stream_report_is_bare() {
    let counts = count(b"hello world\nfoo\n");
    assert_eq!(format_report(&counts, Some(Metric::Words), None), "3");
    assert_eq!(format_report(&counts, None, None), "2 3 16");
}

#[test]
fn char_metric_appears_only_when_asked_for() {
    // 13 bytes, 11 characters: -m must show 11, the combined form 13.
    let counts = count("na\u{ef}ve caf\u{e9}\n".as_bytes());
    assert_eq!(format_report(&counts, Some(Metric::Chars), None), "11");
    assert_eq!(format_report(&counts, None, None), "1 2 13");
}

#[test]
fn labels_are_appended_verbatim() {
    let counts = CountResult::default();
    assert_eq!(format_report(&counts, None, Some("my file.txt")), "0 0 0 my file.txt");
    assert_eq!(format_report(&counts, Some(Metric::Lines), Some("-c")), "0 -c");
}

#[test]
fn single_spaces_everywhere() {
    let counts = count(b"a\n");
    let line = format_report(&counts, None, Some("x"));
    assert_eq!(line, "1 1 2 x");
    assert!(!line.contains("  "));
}
