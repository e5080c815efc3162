// Integration tests for cli/metric.rs: option-to-metric mapping and field
// projection.

use ccwc::cli::metric::Metric;
use ccwc::CountResult;

#[test]
fn metric_variants_are_distinct() {
    assert_ne!(Metric::Lines, Metric::Words);
    assert_ne!(Metric::Words, Metric::Chars);
    assert_ne!(Metric::Chars, Metric::Bytes);
}

#[test]
fn metric_copy_clone() {
    let a = Metric::Chars;
    let b = a;
    let c = a;
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn option_mapping_round_trip() {
    // The option table is part of the CLI contract: four spellings, no more.
    assert_eq!(Metric::from_option("-c"), Some(Metric::Bytes));
    assert_eq!(Metric::from_option("-l"), Some(Metric::Lines));
    assert_eq!(Metric::from_option("-w"), Some(Metric::Words));
    assert_eq!(Metric::from_option("-m"), Some(Metric::Chars));
}

#[test]
fn gnu_style_long_options_are_not_recognized() {
    assert_eq!(Metric::from_option("--bytes"), None);
    assert_eq!(Metric::from_option("--lines"), None);
    assert_eq!(Metric::from_option("--words"), None);
    assert_eq!(Metric::from_option("--chars"), None);
}

#[test]
fn bare_letters_are_not_options() {
    for opt in ["c", "l", "w", "m"] {
        assert_eq!(Metric::from_option(opt), None, "bare {:?}", opt);
    }
}

#[test]
fn select_reads_the_right_field_on_asymmetric_counts() {
    // All four fields differ, so a wrong projection cannot pass by luck.
    let counts = CountResult {
        lines: 7,
        words: 11,
        chars: 13,
        bytes: 17,
    };
    assert_eq!(Metric::Lines.select(&counts), 7);
    assert_eq!(Metric::Words.select(&counts), 11);
    assert_eq!(Metric::Chars.select(&counts), 13);
    assert_eq!(Metric::Bytes.select(&counts), 17);
}
