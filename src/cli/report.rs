//! Builds the single stdout line for a successful invocation.

use crate::cli::metric::Metric;
use crate::count::CountResult;

/// Format `counts` for output.
///
/// With a metric the line carries that one count; without, it carries lines,
/// words and bytes separated by single spaces (the character count never
/// appears in the combined form). A label, when given, is appended after a
/// single space; stream input has no label.
pub fn format_report(counts: &CountResult, metric: Option<Metric>, label: Option<&str>) -> String {
    let body = match metric {
        Some(metric) => metric.select(counts).to_string(),
        None => format!("{} {} {}", counts.lines, counts.words, counts.bytes),
    };
    match label {
        Some(label) => format!("{} {}", body, label),
        None => body,
    }
}
