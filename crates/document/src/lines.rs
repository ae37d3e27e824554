use once_cell::sync::Lazy;
use regex::Regex;

static ACTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r":?([a-zA-Z0-9-]+:[a-zA-Z0-9*]+)").expect("action pattern is a valid regex")
});

/// Pull `namespace:Action` identifiers out of a line of free text.
/// ARNs and fragments that start with `:` are skipped.
pub fn extract_actions_from_line(line: &str) -> Vec<String> {
    ACTION_PATTERN
        .captures_iter(line)
        .filter(|captures| {
            let whole = &captures[0];
            !whole.starts_with("arn:") && !whole.starts_with(':')
        })
        .map(|captures| captures[1].to_string())
        .collect()
}
