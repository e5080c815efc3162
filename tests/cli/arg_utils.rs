// Integration tests for cli/arg_utils.rs: basename extraction for report
// labels.

use ccwc::cli::arg_utils::basename;

#[test]
fn basename_strips_leading_directories() {
    assert_eq!(basename("/var/log/messages.txt"), "messages.txt");
    assert_eq!(basename("src/main.rs"), "main.rs");
}

#[test]
fn basename_leaves_bare_names_alone() {
    assert_eq!(basename("notes"), "notes");
    assert_eq!(basename(".hidden"), ".hidden");
}

#[test]
fn basename_keeps_dots_and_spaces() {
    assert_eq!(basename("dir/archive.tar.gz"), "archive.tar.gz");
    assert_eq!(basename("dir/my file.txt"), "my file.txt");
}

#[test]
fn basename_of_a_directory_spelling_is_empty() {
    // Labels mirror the argument as given; "dir/" names no file.
    assert_eq!(basename("dir/"), "");
    assert_eq!(basename("/"), "");
}

#[test]
fn basename_treats_option_spellings_as_filenames() {
    assert_eq!(basename("-c"), "-c");
    assert_eq!(basename("downloads/-l"), "-l");
}

#[cfg(not(windows))]
#[test]
fn basename_backslashes_are_ordinary_on_unix() {
    assert_eq!(basename("weird\\name"), "weird\\name");
}

#[cfg(windows)]
#[test]
fn basename_handles_windows_separators() {
    assert_eq!(basename("C:\\Users\\docs\\file.txt"), "file.txt");
    assert_eq!(basename("mixed/path\\file.txt"), "file.txt");
}
