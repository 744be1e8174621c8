//! Shared utility functions.

/// Strip `suffix` from the end of `s`, comparing ASCII case-insensitively.
///
/// "about/INDEX.html" with "index.html" -> Some("about/")
/// "about.htm" with ".html" -> None
pub fn strip_suffix_ignore_ascii_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    if !s.is_char_boundary(split) {
        return None;
    }

    let (head, tail) = s.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}

/// Convert an empty or whitespace-only string to `None`.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
