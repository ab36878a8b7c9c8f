//! `scheme://rest` prefix detection.

const SEPARATOR: &str = "://";

/// Matches `path` against `^(.+)://(.+)$`.
///
/// The scheme part is greedy, so the last `://` that still leaves a non-empty
/// rest wins. Like a regex `.`, neither part may contain a line terminator.
/// Returns the lowercased scheme and the remainder.
pub fn match_protocol(path: &str) -> Option<(String, &str)> {
    if path.contains(|c: char| matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')) {
        return None;
    }
    path.rmatch_indices(SEPARATOR)
        .map(|(i, _)| i)
        .find(|&i| i > 0 && i + SEPARATOR.len() < path.len())
        .map(|i| (path[..i].to_lowercase(), &path[i + SEPARATOR.len()..]))
}
