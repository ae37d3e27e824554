use action_shrink_catalog::ActionResolver;
use action_shrink_engine::Result;
use serde_json::Value;

use crate::{extract_actions_from_line, shrink_json_document, DocumentOptions};

#[derive(Debug, Clone, PartialEq)]
pub enum StdinInput {
    Empty,
    /// A JSON document with its action lists already shrunk
    Document(Value),
    /// Identifiers found in free text, not yet shrunk
    Actions(Vec<String>),
}

/// Interpret piped input. JSON objects and arrays are treated as documents and shrunk in
/// place; anything else is scanned line by line for identifiers.
pub async fn parse_stdin_input(
    resolver: &dyn ActionResolver,
    options: &DocumentOptions,
    data: &str,
) -> Result<StdinInput> {
    if data.trim().is_empty() {
        return Ok(StdinInput::Empty);
    }

    if let Ok(mut document) = serde_json::from_str::<Value>(data) {
        if document.is_object() || document.is_array() {
            shrink_json_document(resolver, options, &mut document).await?;
            return Ok(StdinInput::Document(document));
        }
    }

    let actions: Vec<String> = data.lines().flat_map(extract_actions_from_line).collect();
    log::debug!("Found {} actions in text input", actions.len());
    Ok(StdinInput::Actions(actions))
}
