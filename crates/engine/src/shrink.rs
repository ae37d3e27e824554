use action_shrink_catalog::{ActionResolver, ExpandOptions};

use crate::{
    collapse_asterisks, group_actions_by_service, map_actions, shrink_resolved_list,
    validate_shrink_results, Result, ShrinkError, ShrinkOptions, WILDCARD,
};

/// Shrink `desired_patterns` to the smallest pattern list the heuristic finds that matches
/// exactly the same actions.
///
/// Any input that collapses to `*` short-circuits to `["*"]` unless the options restrict the
/// access levels. Every namespace result is re-expanded through `resolver` and compared with
/// the desired actions; a mismatch aborts with [`ShrinkError::Validation`].
pub async fn shrink(
    resolver: &dyn ActionResolver,
    desired_patterns: &[String],
    options: &ShrinkOptions,
) -> Result<Vec<String>> {
    let all_levels = options.covers_all_levels();
    if all_levels
        && desired_patterns
            .iter()
            .any(|pattern| collapse_asterisks(pattern) == WILDCARD)
    {
        return Ok(vec![WILDCARD.to_string()]);
    }

    let target_actions = resolver
        .expand(desired_patterns, ExpandOptions::full())
        .await?;
    let by_service = group_actions_by_service(&target_actions);

    let mut reduced_actions = Vec::new();
    for (service, desired) in &by_service {
        let universe = resolver
            .expand(&[format!("{service}:*")], ExpandOptions::full())
            .await?;
        let possible_actions = map_actions(&universe);

        let (reducible, verbatim) = if all_levels {
            (desired.without_service.clone(), Vec::new())
        } else {
            split_by_level(resolver, service, &desired.without_service, options).await?
        };
        log::debug!(
            "Shrinking {} {service} actions ({} kept as is) against {} possible",
            reducible.len(),
            verbatim.len(),
            possible_actions.len()
        );

        let mut service_patterns = if reducible.is_empty() {
            Vec::new()
        } else {
            shrink_resolved_list(&reducible, &possible_actions, options.iterations)
        };
        service_patterns.extend(verbatim);

        let qualified: Vec<String> = service_patterns
            .iter()
            .map(|pattern| format!("{service}:{pattern}"))
            .collect();
        if let Some(error_match) =
            validate_shrink_results(resolver, &desired.with_service, &qualified).await?
        {
            return Err(ShrinkError::Validation {
                desired_patterns: desired_patterns.to_vec(),
                error_match,
            });
        }

        reduced_actions.extend(qualified);
    }

    Ok(reduced_actions)
}

/// Partition actions into those whose access level is selected (reduced) and the rest (emitted
/// verbatim). Actions without a known level are kept verbatim.
async fn split_by_level(
    resolver: &dyn ActionResolver,
    service: &str,
    actions: &[String],
    options: &ShrinkOptions,
) -> Result<(Vec<String>, Vec<String>)> {
    let mut reducible = Vec::new();
    let mut verbatim = Vec::new();
    for action in actions {
        match resolver.access_level(service, action).await? {
            Some(level) if options.levels.contains(&level) => reducible.push(action.clone()),
            Some(level) => {
                log::debug!("Keeping {service}:{action} as is ({level})");
                verbatim.push(action.clone());
            }
            None => {
                log::debug!("Keeping {service}:{action} as is (no access level)");
                verbatim.push(action.clone());
            }
        }
    }
    Ok((reducible, verbatim))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IterationBudget;
    use action_shrink_catalog::{AccessLevel, ActionCatalog, CatalogError};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn s3_catalog() -> ActionCatalog {
        let mut catalog = ActionCatalog::new();
        for action in [
            "GetObjectTagging",
            "PutObjectTagging",
            "GetBucketTagging",
            "GetObjectVersionAcl",
            "GetObjectAcl",
            "GetObjectVersion",
        ] {
            catalog.insert("s3", action, AccessLevel::Read).unwrap();
        }
        catalog
    }

    fn desired() -> Vec<String> {
        strings(&[
            "s3:GetObjectTagging",
            "s3:PutObjectTagging",
            "s3:GetBucketTagging",
            "s3:GetObjectVersionAcl",
        ])
    }

    /// Fails every call, to prove a code path never reaches the resolver
    struct OfflineResolver;

    #[async_trait]
    impl ActionResolver for OfflineResolver {
        async fn expand(
            &self,
            _patterns: &[String],
            _options: ExpandOptions,
        ) -> action_shrink_catalog::Result<Vec<String>> {
            Err(CatalogError::Other("catalog offline".to_string()))
        }

        async fn access_level(
            &self,
            _namespace: &str,
            _action: &str,
        ) -> action_shrink_catalog::Result<Option<AccessLevel>> {
            Err(CatalogError::Other("catalog offline".to_string()))
        }
    }

    /// Adds an extra action to the third expansion, which is the validation call
    struct DriftingResolver {
        inner: ActionCatalog,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ActionResolver for DriftingResolver {
        async fn expand(
            &self,
            patterns: &[String],
            options: ExpandOptions,
        ) -> action_shrink_catalog::Result<Vec<String>> {
            let mut expanded = self.inner.expand(patterns, options).await?;
            if self.calls.fetch_add(1, Ordering::SeqCst) == 2 {
                expanded.insert(0, "s3:DeleteObject".to_string());
            }
            Ok(expanded)
        }

        async fn access_level(
            &self,
            namespace: &str,
            action: &str,
        ) -> action_shrink_catalog::Result<Option<AccessLevel>> {
            self.inner.access_level(namespace, action).await
        }
    }

    #[tokio::test]
    async fn shrinks_with_default_iterations() {
        let result = shrink(&s3_catalog(), &desired(), &ShrinkOptions::default())
            .await
            .unwrap();
        assert_eq!(result, strings(&["s3:Get*VersionAcl", "s3:*Tagging"]));
    }

    #[tokio::test]
    async fn shrinks_further_without_iteration_limit() {
        let options = ShrinkOptions::default().iterations(IterationBudget::Unlimited);
        let result = shrink(&s3_catalog(), &desired(), &options).await.unwrap();
        assert_eq!(result, strings(&["s3:*VersionAcl", "s3:*Tagging"]));
    }

    #[tokio::test]
    async fn namespaces_are_processed_in_order() {
        let mut catalog = s3_catalog();
        for action in ["DescribeInstances", "DescribeVolumes", "RunInstances"] {
            catalog.insert("ec2", action, AccessLevel::List).unwrap();
        }
        let mut patterns = desired();
        patterns.push("ec2:Describe*".to_string());

        let result = shrink(&catalog, &patterns, &ShrinkOptions::default())
            .await
            .unwrap();
        assert_eq!(
            result,
            strings(&["ec2:Describe*", "s3:Get*VersionAcl", "s3:*Tagging"])
        );
    }

    #[tokio::test]
    async fn whole_namespace_becomes_service_wildcard() {
        let result = shrink(
            &s3_catalog(),
            &strings(&["s3:Get*", "s3:Put*"]),
            &ShrinkOptions::default(),
        )
        .await
        .unwrap();
        assert_eq!(result, strings(&["s3:*"]));
    }

    #[tokio::test]
    async fn global_wildcard_short_circuits() {
        let options = ShrinkOptions::default();
        for first in ["*", "***"] {
            let patterns = strings(&[first, "s3:GetObjectTagging", "s3:PutObjectTagging"]);
            let result = shrink(&OfflineResolver, &patterns, &options).await.unwrap();
            assert_eq!(result, strings(&["*"]));
        }
    }

    #[tokio::test]
    async fn level_subset_suppresses_global_shortcut() {
        let catalog = ActionCatalog::new()
            .with_action("s3", "GetObject", AccessLevel::Read)
            .unwrap()
            .with_action("s3", "GetObjectAcl", AccessLevel::Read)
            .unwrap()
            .with_action("s3", "PutObject", AccessLevel::Write)
            .unwrap();
        let options = ShrinkOptions::default().levels([AccessLevel::Read]);

        let result = shrink(&catalog, &strings(&["*"]), &options).await.unwrap();
        assert_eq!(result, strings(&["s3:Get*", "s3:PutObject"]));
    }

    #[tokio::test]
    async fn unselected_levels_are_kept_verbatim() {
        let catalog = ActionCatalog::new()
            .with_action("s3", "GetObject", AccessLevel::Read)
            .unwrap()
            .with_action("s3", "GetObjectAcl", AccessLevel::Read)
            .unwrap()
            .with_action("s3", "GetObjectTagging", AccessLevel::Read)
            .unwrap()
            .with_action("s3", "PutObjectTagging", AccessLevel::Tagging)
            .unwrap()
            .with_action("s3", "DeleteObject", AccessLevel::Write)
            .unwrap();
        let options = ShrinkOptions::default().levels([AccessLevel::Read]);

        let mut result = shrink(
            &catalog,
            &strings(&["s3:GetObject", "s3:GetObjectAcl", "s3:PutObjectTagging"]),
            &options,
        )
        .await
        .unwrap();
        result.sort();
        assert_eq!(
            result,
            strings(&["s3:*Acl", "s3:GetObject", "s3:PutObjectTagging"])
        );
    }

    #[tokio::test]
    async fn validation_failure_is_fatal() {
        let resolver = DriftingResolver {
            inner: s3_catalog(),
            calls: AtomicUsize::new(0),
        };
        let err = shrink(&resolver, &desired(), &ShrinkOptions::default())
            .await
            .unwrap_err();
        match err {
            ShrinkError::Validation {
                desired_patterns,
                error_match,
            } => {
                assert_eq!(desired_patterns, desired());
                assert_eq!(error_match, "Undesired action: s3:DeleteObject");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn resolver_errors_propagate() {
        let err = shrink(&OfflineResolver, &desired(), &ShrinkOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ShrinkError::Catalog(CatalogError::Other(_))));
    }

    #[tokio::test]
    async fn unknown_patterns_shrink_to_nothing() {
        let result = shrink(
            &s3_catalog(),
            &strings(&["iam:PassRole"]),
            &ShrinkOptions::default(),
        )
        .await
        .unwrap();
        assert!(result.is_empty());
    }
}
