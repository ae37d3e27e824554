use regex::{Regex, RegexBuilder};

pub use action_shrink_catalog::{collapse_asterisks, WILDCARD};
use action_shrink_catalog::wildcard_regex_source;

/// Anchored regex for a wildcard action: `*` matches any run (lazily), everything else is literal
pub fn regex_for_wildcard_action(wildcard_action: &str) -> Result<Regex, regex::Error> {
    let collapsed = collapse_asterisks(wildcard_action);
    RegexBuilder::new(&wildcard_regex_source(&collapsed, ".*?"))
        .case_insensitive(true)
        .build()
}

/// Whether `wildcard_action` matches any of `strings`.
///
/// A pattern that cannot be compiled is reported as matching, so callers never accept it.
pub fn wildcard_action_matches_any_string(wildcard_action: &str, strings: &[String]) -> bool {
    match regex_for_wildcard_action(wildcard_action) {
        Ok(regex) => strings.iter().any(|s| regex.is_match(s)),
        Err(err) => {
            log::warn!("Unusable wildcard pattern {wildcard_action}: {err}");
            true
        }
    }
}

/// Case-sensitive matcher used to compare patterns against patterns.
/// `*` in `general` also matches literal `*` characters in the candidate.
pub(crate) fn subsumption_regex(general: &str) -> Result<Regex, regex::Error> {
    Regex::new(&wildcard_regex_source(general, ".*"))
}
