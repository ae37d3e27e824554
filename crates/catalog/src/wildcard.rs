pub const WILDCARD: &str = "*";

/// Collapse runs of `*` into a single `*`
pub fn collapse_asterisks(wildcard_action: &str) -> String {
    let mut collapsed = String::with_capacity(wildcard_action.len());
    for ch in wildcard_action.chars() {
        if ch == '*' && collapsed.ends_with('*') {
            continue;
        }
        collapsed.push(ch);
    }
    collapsed
}

/// Anchored regex source for a wildcard pattern. Literal text is escaped and every `*`
/// becomes `any`.
pub fn wildcard_regex_source(pattern: &str, any: &str) -> String {
    let body = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(any);
    format!("^{body}$")
}
