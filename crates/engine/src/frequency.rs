use std::collections::HashSet;

use crate::split_action_into_parts;

/// How many actions contain a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceFrequency {
    pub sequence: String,
    pub frequency: usize,
    pub length: usize,
}

/// Count, for each substring, how many actions contain it (case-sensitive).
/// Substrings found in no action are omitted; input order is kept.
pub fn count_substrings(substrings: &[String], actions: &[String]) -> Vec<(String, usize)> {
    substrings
        .iter()
        .filter_map(|substring| {
            let count = actions
                .iter()
                .filter(|action| action.contains(substring.as_str()))
                .count();
            (count > 0).then(|| (substring.clone(), count))
        })
        .collect()
}

/// Distinct tokens of `actions`, in first-seen order, with their frequency and length
pub fn find_common_sequences(actions: &[String]) -> Vec<SequenceFrequency> {
    let mut seen = HashSet::new();
    let mut tokens = Vec::new();
    for action in actions {
        for part in split_action_into_parts(action) {
            if seen.insert(part.clone()) {
                tokens.push(part);
            }
        }
    }

    count_substrings(&tokens, actions)
        .into_iter()
        .map(|(sequence, frequency)| SequenceFrequency {
            length: sequence.chars().count(),
            sequence,
            frequency,
        })
        .collect()
}
