//! Centralized state for the dashboard.
//!
//! The store is the only shared mutable resource. Updates go through
//! [`Store::dispatch`], which applies [`reduce`] under the watch channel's
//! lock and wakes every subscriber.

pub mod actions;
pub mod effects;
pub mod selectors;

use crate::models::{NamespaceScope, ResourceKey, ResourceRecord, ALL_NAMESPACES};
use actions::Action;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq)]
pub struct StoreState {
    pub pipeline_resources: BTreeMap<ResourceKey, ResourceRecord>,
    pub is_fetching: bool,
    pub error_message: Option<String>,
    /// `*` selects all namespaces.
    pub selected_namespace: String,
    pub connected: bool,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            pipeline_resources: BTreeMap::new(),
            is_fetching: false,
            error_message: None,
            selected_namespace: ALL_NAMESPACES.to_string(),
            connected: false,
        }
    }
}

pub fn reduce(state: &mut StoreState, action: Action) {
    match action {
        Action::FetchRequest { namespace } => {
            tracing::debug!(%namespace, "Fetching PipelineResources");
            state.is_fetching = true;
        }
        Action::FetchSuccess { namespace, items } => {
            let scope = NamespaceScope::from_selection(Some(&namespace));
            state
                .pipeline_resources
                .retain(|key, _| !scope.contains(&key.namespace));
            for record in items {
                state.pipeline_resources.insert(record.key(), record);
            }
            state.is_fetching = false;
            state.error_message = None;
        }
        Action::FetchFailure { message } => {
            state.is_fetching = false;
            state.error_message = Some(message);
        }
        Action::ResourceUpserted(record) => {
            state.pipeline_resources.insert(record.key(), record);
        }
        Action::ResourceDeleted(key) => {
            state.pipeline_resources.remove(&key);
        }
        Action::SelectNamespace(namespace) => {
            state.selected_namespace = if namespace.is_empty() {
                ALL_NAMESPACES.to_string()
            } else {
                namespace
            };
        }
        Action::LiveConnected => state.connected = true,
        Action::LiveDisconnected => state.connected = false,
    }
}

#[derive(Clone)]
pub struct Store {
    tx: Arc<watch::Sender<StoreState>>,
}

impl Store {
    pub fn new(initial: StoreState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    pub fn dispatch(&self, action: Action) {
        tracing::trace!(?action, "dispatch");
        self.tx.send_modify(|state| reduce(state, action));
    }

    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> StoreState {
        self.tx.borrow().clone()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(StoreState::default())
    }
}
