#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Counting must be total: no byte sequence may panic or error.
    let counts = ccwc::count(data);

    // The byte count is definitional.
    assert_eq!(counts.bytes, data.len());

    // Substitution never inflates the character count past the byte count,
    // and every counted newline is itself a character.
    assert!(counts.chars <= counts.bytes);
    assert!(counts.lines <= counts.chars);
    assert!(counts.words <= counts.chars);

    // Newline bytes can never be absorbed into a substitution, so the line
    // count must match a raw scan.
    let raw_newlines = data.iter().filter(|&&b| b == b'\n').count();
    assert_eq!(counts.lines, raw_newlines);

    // Pure function: a second pass must agree.
    assert_eq!(counts, ccwc::count(data));
});
