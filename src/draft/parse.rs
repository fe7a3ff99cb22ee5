//! Splitting a free-text model reply into individual post candidates.

/// Characters stripped from the start of a list line.
const MARKER_CHARS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '-', ')', ' '];

/// Parse a reply into candidates.
///
/// A trimmed line counts as a candidate only if it starts with a digit (any
/// Unicode numeric character) or a dash; its leading run of ASCII digits,
/// `.`, `-`, `)` and spaces is stripped.
/// Other lines are dropped. If no line qualifies, the whole trimmed reply is
/// returned as the only candidate, so the result is never empty.
pub fn parse_drafts(reply: &str) -> Vec<String> {
    let reply = reply.trim();

    let drafts: Vec<String> = reply
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with(|c: char| c.is_numeric() || c == '-'))
        .map(|line| line.trim_start_matches(MARKER_CHARS).trim())
        .filter(|draft| !draft.is_empty())
        .map(str::to_string)
        .collect();

    if drafts.is_empty() {
        vec![reply.to_string()]
    } else {
        drafts
    }
}
