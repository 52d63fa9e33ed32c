//! Read-only projections of [`StoreState`].

use super::StoreState;
use crate::models::{NamespaceScope, ResourceRecord};

/// Records in `namespace`, or all of them for the all-namespaces scope,
/// ordered by (namespace, name).
pub fn get_pipeline_resources(state: &StoreState, namespace: &str) -> Vec<ResourceRecord> {
    let scope = NamespaceScope::from_selection(Some(namespace));
    state
        .pipeline_resources
        .values()
        .filter(|record| scope.contains(&record.namespace))
        .cloned()
        .collect()
}

pub fn get_pipeline_resources_error_message(state: &StoreState) -> Option<&str> {
    state.error_message.as_deref()
}

pub fn is_fetching_pipeline_resources(state: &StoreState) -> bool {
    state.is_fetching
}

pub fn get_selected_namespace(state: &StoreState) -> &str {
    &state.selected_namespace
}

pub fn is_live_connected(state: &StoreState) -> bool {
    state.connected
}
