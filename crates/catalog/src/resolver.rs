use async_trait::async_trait;

use crate::{AccessLevel, Result};

/// Options for [`ActionResolver::expand`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandOptions {
    /// Expand an exact `namespace:*` into every action of the namespace.
    /// When unset the pattern is returned as written.
    pub expand_service_asterisk: bool,
}

impl ExpandOptions {
    /// Expand everything, including namespace wildcards
    pub fn full() -> Self {
        Self {
            expand_service_asterisk: true,
        }
    }
}

/// Resolves patterns against the live set of actions.
///
/// Implementations must be deterministic for a given snapshot of their data: the shrink engine
/// validates its output by expanding it again and comparing sets.
#[async_trait]
pub trait ActionResolver: Send + Sync {
    /// Expand literal and wildcard patterns into sorted, unique `namespace:Action` identifiers
    async fn expand(&self, patterns: &[String], options: ExpandOptions) -> Result<Vec<String>>;

    /// Access level of a single action, `None` when the action is unknown
    async fn access_level(&self, namespace: &str, action: &str) -> Result<Option<AccessLevel>>;
}
