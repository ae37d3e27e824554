use regex::Regex;

use crate::wildcard::subsumption_regex;

/// Drop patterns that are covered by a more general pattern in the list.
///
/// `["*Object", "Object*", "*Object*"]` becomes `["*Object*"]`. Longer patterns are visited
/// first; a pattern is kept unless an already kept pattern matches it, and keeping it evicts
/// the kept patterns it matches.
pub fn consolidate_wildcard_patterns(mut patterns: Vec<String>) -> Vec<String> {
    patterns.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut consolidated: Vec<(String, Option<Regex>)> = Vec::new();
    for pattern in patterns {
        let covered = consolidated
            .iter()
            .any(|(_, general)| covers(general.as_ref(), &pattern));
        if covered {
            continue;
        }

        let general = match subsumption_regex(&pattern) {
            Ok(regex) => Some(regex),
            Err(err) => {
                log::warn!("Pattern {pattern} cannot subsume others: {err}");
                None
            }
        };
        consolidated.retain(|(kept, _)| !covers(general.as_ref(), kept));
        consolidated.push((pattern, general));
    }

    consolidated.into_iter().map(|(pattern, _)| pattern).collect()
}

fn covers(general: Option<&Regex>, specific: &str) -> bool {
    general.is_some_and(|regex| regex.is_match(specific))
}
