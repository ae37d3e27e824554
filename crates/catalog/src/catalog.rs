use async_trait::async_trait;
use regex::{Regex, RegexBuilder};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use crate::wildcard::{collapse_asterisks, wildcard_regex_source, WILDCARD};
use crate::{AccessLevel, ActionResolver, CatalogError, ExpandOptions, Result};

/// In-memory action catalog keyed by lowercase namespace
#[derive(Debug, Clone, Default)]
pub struct ActionCatalog {
    namespaces: BTreeMap<String, BTreeMap<String, AccessLevel>>,
}

impl ActionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog of the form `{ "<namespace>": { "<Action>": "<AccessLevel>" } }`
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let parsed: BTreeMap<String, BTreeMap<String, AccessLevel>> = serde_json::from_str(raw)?;
        let mut catalog = Self::new();
        for (namespace, actions) in parsed {
            for (action, level) in actions {
                catalog.insert(&namespace, &action, level)?;
            }
        }
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json_str(&raw)?;
        log::debug!(
            "Loaded {} actions in {} namespaces from {}",
            catalog.action_count(),
            catalog.namespace_count(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    /// Register an action. Namespaces are stored lowercase, action names as given.
    pub fn insert(&mut self, namespace: &str, action: &str, level: AccessLevel) -> Result<()> {
        for part in [namespace, action] {
            if part.is_empty() || part.contains(':') || part.contains('*') {
                return Err(CatalogError::InvalidAction(format!("{namespace}:{action}")));
            }
        }
        self.namespaces
            .entry(namespace.to_ascii_lowercase())
            .or_default()
            .insert(action.to_string(), level);
        Ok(())
    }

    /// Builder-style [`ActionCatalog::insert`]
    pub fn with_action(
        mut self,
        namespace: &str,
        action: &str,
        level: AccessLevel,
    ) -> Result<Self> {
        self.insert(namespace, action, level)?;
        Ok(self)
    }

    pub fn namespace_count(&self) -> usize {
        self.namespaces.len()
    }

    pub fn action_count(&self) -> usize {
        self.namespaces.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.action_count() == 0
    }

    fn expand_pattern(&self, pattern: &str, options: ExpandOptions, out: &mut BTreeSet<String>) {
        let pattern = pattern.trim();
        if collapse_asterisks(pattern) == WILDCARD {
            for (namespace, actions) in &self.namespaces {
                out.extend(actions.keys().map(|action| format!("{namespace}:{action}")));
            }
            return;
        }

        let Some((namespace, action_pattern)) = pattern.split_once(':') else {
            log::warn!("Ignoring pattern without a namespace: {pattern}");
            return;
        };
        let namespace = namespace.to_ascii_lowercase();
        let Some(actions) = self.namespaces.get(&namespace) else {
            log::debug!("Unknown namespace in pattern {pattern}");
            return;
        };

        let action_pattern = collapse_asterisks(action_pattern);
        if action_pattern == WILDCARD && !options.expand_service_asterisk {
            out.insert(format!("{namespace}:*"));
            return;
        }

        let regex = match action_regex(&action_pattern) {
            Ok(regex) => regex,
            Err(err) => {
                log::warn!("Ignoring pattern {pattern}: {err}");
                return;
            }
        };
        for action in actions.keys().filter(|action| regex.is_match(action)) {
            out.insert(format!("{namespace}:{action}"));
        }
    }

    fn level_of(&self, namespace: &str, action: &str) -> Option<AccessLevel> {
        let actions = self.namespaces.get(&namespace.to_ascii_lowercase())?;
        actions.get(action).copied().or_else(|| {
            actions
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(action))
                .map(|(_, level)| *level)
        })
    }
}

#[async_trait]
impl ActionResolver for ActionCatalog {
    async fn expand(&self, patterns: &[String], options: ExpandOptions) -> Result<Vec<String>> {
        let mut expanded = BTreeSet::new();
        for pattern in patterns {
            self.expand_pattern(pattern, options, &mut expanded);
        }
        Ok(expanded.into_iter().collect())
    }

    async fn access_level(&self, namespace: &str, action: &str) -> Result<Option<AccessLevel>> {
        Ok(self.level_of(namespace, action))
    }
}

fn action_regex(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    RegexBuilder::new(&wildcard_regex_source(pattern, ".*"))
        .case_insensitive(true)
        .build()
}
