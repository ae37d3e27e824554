use action_shrink_catalog::{ActionResolver, ExpandOptions};
use std::collections::HashSet;

use crate::Result;

/// Check that `patterns` expand to exactly `desired_actions`.
///
/// Returns the first problem found (`Undesired action: …` or `Missing action …`), or `None`
/// when the sets are equal.
pub async fn validate_shrink_results(
    resolver: &dyn ActionResolver,
    desired_actions: &[String],
    patterns: &[String],
) -> Result<Option<String>> {
    let desired: HashSet<&str> = desired_actions.iter().map(String::as_str).collect();
    let expanded = resolver.expand(patterns, ExpandOptions::full()).await?;
    let achieved: HashSet<&str> = expanded.iter().map(String::as_str).collect();

    if let Some(extra) = expanded.iter().find(|action| !desired.contains(action.as_str())) {
        return Ok(Some(format!("Undesired action: {extra}")));
    }
    if let Some(missing) = desired_actions
        .iter()
        .find(|action| !achieved.contains(action.as_str()))
    {
        return Ok(Some(format!("Missing action {missing}")));
    }

    Ok(None)
}
