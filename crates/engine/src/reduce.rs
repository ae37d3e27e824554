use crate::{
    collapse_asterisks, split_action_into_parts, wildcard_action_matches_any_string, WILDCARD,
};

/// Replace as many parts of `desired_action` with `*` as possible while keeping `sequence`
/// literal and not matching any of `undesired_actions`.
///
/// Parts are replaced one at a time walking away from `sequence`. Each direction stops at the
/// first replacement that would match an undesired action; there is no backtracking.
/// Actions with a single part, or without `sequence` as one of their parts, are returned as is.
pub fn reduce_action(desired_action: &str, sequence: &str, undesired_actions: &[String]) -> String {
    let parts = split_action_into_parts(desired_action);
    if parts.len() == 1 {
        return desired_action.to_string();
    }
    let Some(index) = parts.iter().position(|part| part == sequence) else {
        return desired_action.to_string();
    };

    let last = parts.len() - 1;
    let mut working = parts.clone();
    let mut shorter = desired_action.to_string();

    if index == 0 {
        for i in 1..=last {
            working[i] = WILDCARD.to_string();
            match safe_candidate(&working, undesired_actions) {
                Some(candidate) => shorter = candidate,
                None => break,
            }
        }
    } else if index == last {
        for i in (0..last).rev() {
            working[i] = WILDCARD.to_string();
            match safe_candidate(&working, undesired_actions) {
                Some(candidate) => shorter = candidate,
                None => break,
            }
        }
    } else {
        for i in index + 1..=last {
            working[i] = WILDCARD.to_string();
            match safe_candidate(&working, undesired_actions) {
                Some(candidate) => shorter = candidate,
                None => {
                    // Undo before walking backwards; accepted replacements stay.
                    working[i] = parts[i].clone();
                    break;
                }
            }
        }
        for i in (0..index).rev() {
            working[i] = WILDCARD.to_string();
            match safe_candidate(&working, undesired_actions) {
                Some(candidate) => shorter = candidate,
                None => break,
            }
        }
    }

    shorter
}

fn safe_candidate(parts: &[String], undesired_actions: &[String]) -> Option<String> {
    let candidate = collapse_asterisks(&parts.concat());
    (!wildcard_action_matches_any_string(&candidate, undesired_actions)).then_some(candidate)
}
