use action_shrink_catalog::ActionResolver;
use action_shrink_engine::{shrink, Result, ShrinkOptions};
use serde_json::Value;

const ACTION_KEYS: [&str; 2] = ["Action", "NotAction"];

#[derive(Debug, Clone, Default)]
pub struct DocumentOptions {
    pub shrink: ShrinkOptions,
    /// Delete string `Sid` fields while walking the document
    pub remove_sids: bool,
}

/// Shrink every `Action` / `NotAction` list of strings found anywhere in `document`, in place.
pub async fn shrink_json_document(
    resolver: &dyn ActionResolver,
    options: &DocumentOptions,
    document: &mut Value,
) -> Result<()> {
    let mut pending: Vec<&mut Value> = vec![document];
    let mut lists = 0usize;

    while let Some(node) = pending.pop() {
        match node {
            Value::Object(map) => {
                if options.remove_sids && map.get("Sid").is_some_and(Value::is_string) {
                    map.shift_remove("Sid");
                }
                for (key, value) in map.iter_mut() {
                    if ACTION_KEYS.contains(&key.as_str()) {
                        if let Some(actions) = action_list(value) {
                            let shrunk = shrink(resolver, &actions, &options.shrink).await?;
                            *value = Value::Array(shrunk.into_iter().map(Value::String).collect());
                            lists += 1;
                            continue;
                        }
                    }
                    pending.push(value);
                }
            }
            Value::Array(items) => pending.extend(items.iter_mut()),
            _ => {}
        }
    }

    log::debug!("Shrunk {lists} action lists");
    Ok(())
}

/// Non-empty array made only of strings. Anything else, such as a list mixing in template
/// intrinsics, is left as written.
fn action_list(value: &Value) -> Option<Vec<String>> {
    let items = value.as_array()?;
    if items.is_empty() {
        return None;
    }
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}
