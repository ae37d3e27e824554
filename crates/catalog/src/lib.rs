//! # Action Shrink Catalog
//!
//! The source of truth for which `namespace:Action` identifiers exist.
//!
//! The shrink engine never decides on its own what a wildcard pattern matches. It asks an
//! [`ActionResolver`] to expand patterns into literal identifiers and to classify identifiers
//! by [`AccessLevel`]. [`ActionCatalog`] is the in-memory resolver used by the CLI and tests.
//!
//! ## Catalog file
//!
//! ```text
//! {
//!   "s3": {
//!     "GetObject": "Read",
//!     "PutObjectTagging": "Tagging",
//!     "ListBucket": "List"
//!   }
//! }
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use action_shrink_catalog::{ActionCatalog, ActionResolver, ExpandOptions};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let catalog = ActionCatalog::from_path("catalog.json")?;
//!     let actions = catalog
//!         .expand(&["s3:Get*".to_string()], ExpandOptions::default())
//!         .await?;
//!     for action in actions {
//!         println!("{action}");
//!     }
//!     Ok(())
//! }
//! ```

mod catalog;
mod error;
mod level;
mod resolver;
mod wildcard;

pub use catalog::ActionCatalog;
pub use error::{CatalogError, Result};
pub use level::AccessLevel;
pub use resolver::{ActionResolver, ExpandOptions};
pub use wildcard::{collapse_asterisks, wildcard_regex_source, WILDCARD};
