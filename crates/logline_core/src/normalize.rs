// normalize.rs: content sanitizers for delimited storage and identifier fragments

/// Replace every backslash, double quote, and single quote with a pipe so the
/// value can sit inside a quote-delimited store. Lossy: pipes already present
/// in the input are indistinguishable from replaced characters afterwards.
pub fn clean_content(input: &str) -> String {
    input
        .chars()
        .map(|ch| match ch {
            '\\' | '"' | '\'' => '|',
            other => other,
        })
        .collect()
}

/// Reduce arbitrary text to a filesystem/URI-safe fragment: anything outside
/// `[A-Za-z0-9._-]` becomes an underscore, and a trailing run of dots is
/// stripped. Composable with `clean_content` in either order.
pub fn clean_uri_content(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-') {
            out.push(ch);
        } else {
            out.push('_');
        }
    }
    let kept = out.trim_end_matches('.').len();
    out.truncate(kept);
    out
}

#[cfg(test)]
mod tests {
    use super::{clean_content, clean_uri_content};

    #[test]
    fn test_clean_content_replaces_quoting_chars() {
        assert_eq!(clean_content("a\\b\"c'd"), "a|b|c|d");
        assert_eq!(clean_content(""), "");
        assert_eq!(clean_content("no change here"), "no change here");
        // Pre-existing pipes survive and are indistinguishable
        assert_eq!(clean_content("x|y'z"), "x|y|z");
    }

    #[test]
    fn test_clean_content_leaves_no_quoting_chars() {
        let inputs = ["'''", "\\\\", "mixed \"it's\" \\ here", "plain"];
        for s in inputs {
            let cleaned = clean_content(s);
            assert!(!cleaned.contains('\\'), "backslash left in {cleaned:?}");
            assert!(!cleaned.contains('"'), "double quote left in {cleaned:?}");
            assert!(!cleaned.contains('\''), "single quote left in {cleaned:?}");
        }
    }

    #[test]
    fn test_clean_uri_content() {
        assert_eq!(clean_uri_content("héllo world!!"), "h_llo_world__");
        assert_eq!(clean_uri_content("already-safe_1.2"), "already-safe_1.2");
        assert_eq!(clean_uri_content("trailing.dots..."), "trailing.dots");
        assert_eq!(clean_uri_content("..."), "");
        assert_eq!(clean_uri_content(""), "");
        // dots in the middle survive
        assert_eq!(clean_uri_content("a.b.c."), "a.b.c");
    }

    #[test]
    fn test_clean_uri_content_charset() {
        let cleaned = clean_uri_content("spaces, symbols & ünïcode/paths");
        assert!(cleaned
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')));
        assert!(!cleaned.ends_with('.'));
    }
}
