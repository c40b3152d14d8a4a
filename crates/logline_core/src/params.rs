// params.rs: parser for the quoted, comma-delimited parameter-list encoding

/// Recover the ordered parameter tokens from a serialized list such as
/// `['pam_unix', 'session opened']`.
///
/// The encoding is a micro-format of its own: items are wrapped in single
/// quotes and joined by `', '`, with the whole list enclosed in one more
/// bracket/quote pair. Mixed-quote item boundaries (`", '` / `', "`) are
/// normalized to the single-quote form first. Items containing internal
/// whitespace contribute one token per whitespace-separated word, so the
/// example above yields `["pam_unix", "session", "opened"]`.
///
/// Never fails: malformed input degrades to best-effort splitting, and
/// anything that trims to four characters or fewer encodes an empty list.
pub fn parse_parameter_list(raw: &str) -> Vec<String> {
    let normalized = raw.replace("\", '", "', '").replace("', \"", "', '");
    let interior = match strip_list_markers(normalized.trim()) {
        Some(inner) => inner,
        None => return Vec::new(),
    };

    let mut parameters = Vec::new();
    for item in interior.split("', '") {
        for token in item.split_whitespace() {
            parameters.push(token.to_string());
        }
    }
    parameters
}

// Drop the two-character enclosing markers from each end. Four characters or
// fewer covers the empty renderings (`[]`, `['']`) and leaves nothing inside.
// Offsets are found per char, so multi-byte input cannot split a boundary.
fn strip_list_markers(s: &str) -> Option<&str> {
    if s.chars().count() <= 4 {
        return None;
    }
    let start = s.char_indices().nth(2).map(|(i, _)| i)?;
    let end = s.char_indices().rev().nth(1).map(|(i, _)| i)?;
    Some(&s[start..end])
}
