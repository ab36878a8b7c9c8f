//! Query, name and extension splitting for path-like strings.

/// Truncates `path` at the first `?`, dropping the query string.
pub fn strip_query(path: &str) -> &str {
    match path.find('?') {
        Some(i) => &path[..i],
        None => path,
    }
}

/// Returns the final segment of `path` (after the last `/` or `\`).
pub fn file_name(path: &str) -> &str {
    match path.rfind(|c: char| c == '/' || c == '\\') {
        Some(i) => &path[i + 1..],
        None => path,
    }
}

/// Splits a file name into `(base, ext)` at the last `.`; `ext` is lowercased.
///
/// A name without any `.` yields `("", "")`: the base is cut at index -1,
/// which clamps to 0. Callers rely on this, so it is kept.
pub fn split_extension(name: &str) -> (&str, String) {
    match name.rfind('.') {
        Some(i) => (&name[..i], name[i + 1..].to_lowercase()),
        None => ("", String::new()),
    }
}

/// Returns the directory prefix of `path`, up to and including the last `/`.
pub fn dir_prefix(path: &str) -> &str {
    match path.rfind('/') {
        Some(i) => &path[..=i],
        None => "",
    }
}

/// Lowercased text after the last `.` of `s` (the whole string if it has none).
pub(super) fn last_dot_segment(s: &str) -> String {
    s.rsplit('.').next().unwrap_or("").to_lowercase()
}

/// Returns the first `n` characters of `s`. Non-positive `n` yields `""`,
/// an `n` beyond the end yields `s`.
pub(super) fn take_chars(s: &str, n: isize) -> &str {
    if n <= 0 {
        return "";
    }
    match s.char_indices().nth(n as usize) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_query_cuts_at_first_question_mark() {
        assert_eq!(strip_query("foo.json?query=1"), "foo.json");
        assert_eq!(strip_query("a?b?c.pdb"), "a");
        assert_eq!(strip_query("plain.pdb"), "plain.pdb");
        assert_eq!(strip_query("?only"), "");
    }

    #[test]
    fn file_name_handles_both_separators() {
        assert_eq!(file_name("a/b/c.pdb"), "c.pdb");
        assert_eq!(file_name("C:\\data\\mol.gro"), "mol.gro");
        assert_eq!(file_name("mixed\\dir/x.xtc"), "x.xtc");
        assert_eq!(file_name("trailing/"), "");
        assert_eq!(file_name("bare"), "bare");
    }

    #[test]
    fn split_extension_lowercases_last_segment() {
        assert_eq!(split_extension("c.PDB"), ("c", "pdb".to_string()));
        assert_eq!(split_extension("a.b.c"), ("a.b", "c".to_string()));
        assert_eq!(split_extension(".bashrc"), ("", "bashrc".to_string()));
        assert_eq!(split_extension("name."), ("name", String::new()));
    }

    #[test]
    fn split_extension_without_dot_keeps_inherited_empty_base() {
        assert_eq!(split_extension("readme"), ("", String::new()));
        assert_eq!(split_extension(""), ("", String::new()));
    }

    #[test]
    fn dir_prefix_includes_separator() {
        assert_eq!(dir_prefix("a/b/c.pdb"), "a/b/");
        assert_eq!(dir_prefix("c.pdb"), "");
        assert_eq!(dir_prefix("/root.pdb"), "/");
    }

    #[test]
    fn take_chars_clamps() {
        assert_eq!(take_chars("abcdef", 3), "abc");
        assert_eq!(take_chars("abc", 10), "abc");
        assert_eq!(take_chars("abc", 0), "");
        assert_eq!(take_chars("abc", -2), "");
        assert_eq!(take_chars("ñandú", 2), "ña");
    }

    #[test]
    fn last_dot_segment_of_undotted_is_whole() {
        assert_eq!(last_dot_segment("a/b/C.PDB"), "pdb");
        assert_eq!(last_dot_segment("traj"), "traj");
    }
}
