//! Applies the shrink engine to whatever the user pipes in: policy documents with `Action` /
//! `NotAction` lists, or free text mentioning `namespace:Action` identifiers.

mod document;
mod input;
mod lines;

pub use document::{shrink_json_document, DocumentOptions};
pub use input::{parse_stdin_input, StdinInput};
pub use lines::extract_actions_from_line;
