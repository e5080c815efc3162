// arg_utils.rs — path helpers for CLI output labels

/// Returns the final component of `path` for use as a display label.
///
/// Everything up to the last `/` is stripped; on Windows a trailing `\` is
/// treated as a separator too, so both spellings of a path yield the same
/// label. A path that ends in a separator produces an empty label rather
/// than falling back to a parent component.
pub fn basename(path: &str) -> &str {
    let after_slash = match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    };
    if cfg!(windows) {
        match after_slash.rfind('\\') {
            Some(pos) => &after_slash[pos + 1..],
            None => after_slash,
        }
    } else {
        after_slash
    }
}
