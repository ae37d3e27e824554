use std::collections::BTreeMap;

/// Actions of one namespace, with and without the `namespace:` prefix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceActions {
    pub with_service: Vec<String>,
    pub without_service: Vec<String>,
}

/// Group `namespace:Action` identifiers by namespace (iterates in ascending namespace order)
pub fn group_actions_by_service(actions: &[String]) -> BTreeMap<String, ServiceActions> {
    let mut services: BTreeMap<String, ServiceActions> = BTreeMap::new();
    for action in actions {
        let (service, local) = split_action(action);
        let entry = services.entry(service.to_string()).or_default();
        entry.with_service.push(action.clone());
        entry.without_service.push(local.to_string());
    }
    services
}

/// Strip the namespace prefix from every identifier
pub fn map_actions(actions: &[String]) -> Vec<String> {
    actions
        .iter()
        .map(|action| split_action(action).1.to_string())
        .collect()
}

fn split_action(action: &str) -> (&str, &str) {
    action.split_once(':').unwrap_or((action, ""))
}
