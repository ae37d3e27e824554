use std::collections::HashSet;

use crate::{
    consolidate_wildcard_patterns, find_common_sequences, reduce_action, IterationBudget, WILDCARD,
};

/// Reduce `desired_actions` to the fewest patterns that match only them out of
/// `possible_actions`.
///
/// Shallow passes (most frequent token only) run while they keep shrinking the list, then deep
/// passes (every token) under the same rule. Every pass spends one unit of `budget`; the
/// current list is returned as soon as the budget runs out.
pub fn shrink_resolved_list(
    desired_actions: &[String],
    possible_actions: &[String],
    budget: IterationBudget,
) -> Vec<String> {
    let desired: HashSet<&str> = desired_actions.iter().map(String::as_str).collect();
    let undesired_actions: Vec<String> = possible_actions
        .iter()
        .filter(|action| !desired.contains(action.as_str()))
        .cloned()
        .collect();

    if undesired_actions.is_empty() {
        return vec![WILDCARD.to_string()];
    }

    let mut budget = budget;
    let mut actions = desired_actions.to_vec();
    for deep in [false, true] {
        loop {
            let previous_len = actions.len();
            actions = shrink_iteration(&actions, &undesired_actions, deep);
            log::debug!(
                "{} pass: {previous_len} -> {} patterns",
                if deep { "Deep" } else { "Shallow" },
                actions.len()
            );
            if !budget.consume() {
                return actions;
            }
            if actions.len() >= previous_len {
                break;
            }
        }
    }

    actions
}

/// One reduction pass over `desired_actions`.
///
/// Tokens are ranked by how many actions contain them. A shallow pass reduces with the top
/// token only; a deep pass reduces with every token in rank order, each feeding the next.
pub fn shrink_iteration(
    desired_actions: &[String],
    undesired_actions: &[String],
    deep: bool,
) -> Vec<String> {
    let mut sequences = find_common_sequences(desired_actions);
    sequences.retain(|sequence| sequence.sequence != WILDCARD);
    sequences.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    if !deep {
        sequences.truncate(1);
    }

    let mut reduced = desired_actions.to_vec();
    for sequence in &sequences {
        let mut seen = HashSet::new();
        let iteration: Vec<String> = reduced
            .iter()
            .map(|action| reduce_action(action, &sequence.sequence, undesired_actions))
            .filter(|action| seen.insert(action.clone()))
            .collect();
        reduced = consolidate_wildcard_patterns(iteration);
    }

    reduced
}
