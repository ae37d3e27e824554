//! # Action Shrink Engine
//!
//! Reduces a list of `namespace:Action` identifiers and wildcard patterns to a small list of
//! wildcard patterns that matches exactly the same actions.
//!
//! ## Architecture
//!
//! ```text
//! Desired patterns
//!     │
//!     ├──> ActionResolver::expand → Target Set
//!     │
//!     ├──> Group by namespace
//!     │
//!     └──> Per namespace
//!          ├─> ActionResolver::expand("ns:*") → Universe, Undesired = Universe − Target
//!          ├─> Shallow passes (most frequent token), then deep passes (every token)
//!          │    ├─> reduce_action: grow wildcards around the token until an undesired match
//!          │    └─> consolidate_wildcard_patterns: drop subsumed patterns
//!          └─> validate_shrink_results: expand(result) == Target Set, or fail hard
//! ```
//!
//! The reduction is a greedy heuristic. It does not look for the globally smallest pattern
//! list, but every result is checked against the resolver before it is returned.
//!
//! ## Example
//!
//! ```no_run
//! use action_shrink_catalog::ActionCatalog;
//! use action_shrink_engine::{shrink, ShrinkOptions};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let catalog = ActionCatalog::from_path("catalog.json")?;
//!     let desired = vec!["s3:GetObjectTagging".to_string(), "s3:PutObjectTagging".to_string()];
//!     for pattern in shrink(&catalog, &desired, &ShrinkOptions::default()).await? {
//!         println!("{pattern}");
//!     }
//!     Ok(())
//! }
//! ```

mod consolidate;
mod error;
mod frequency;
mod grouping;
mod iteration;
mod options;
mod reduce;
mod shrink;
mod tokenize;
mod validate;
mod wildcard;

pub use consolidate::consolidate_wildcard_patterns;
pub use error::{Result, ShrinkError};
pub use frequency::{count_substrings, find_common_sequences, SequenceFrequency};
pub use grouping::{group_actions_by_service, map_actions, ServiceActions};
pub use iteration::{shrink_iteration, shrink_resolved_list};
pub use options::{IterationBudget, ShrinkOptions};
pub use reduce::reduce_action;
pub use shrink::shrink;
pub use tokenize::split_action_into_parts;
pub use validate::validate_shrink_results;
pub use wildcard::{
    collapse_asterisks, regex_for_wildcard_action, wildcard_action_matches_any_string, WILDCARD,
};
