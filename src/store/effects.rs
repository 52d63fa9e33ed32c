//! Side effects behind the view's fetch and delete actions.

use super::actions::Action;
use super::Store;
use crate::error::error_message;
use crate::models::pipeline_resource::PipelineResource;
use crate::models::{NamespaceScope, ResourceKey, ResourceRecord};
use crate::resources::ResourceManager;
use crate::view::{FetchParams, ViewActions};
use std::sync::Arc;

pub type SharedManager = Arc<dyn ResourceManager<Resource = PipelineResource>>;

/// Runs fetches and deletes on the tokio runtime and reports fetch outcomes
/// back into the store.
#[derive(Clone)]
pub struct StoreActions {
    store: Store,
    manager: SharedManager,
}

impl StoreActions {
    pub fn new(store: Store, manager: SharedManager) -> Self {
        Self { store, manager }
    }
}

impl ViewActions for StoreActions {
    fn fetch_pipeline_resources(&self, params: FetchParams) {
        let FetchParams { namespace } = params;
        self.store.dispatch(Action::FetchRequest {
            namespace: namespace.clone(),
        });

        let store = self.store.clone();
        let manager = Arc::clone(&self.manager);
        tokio::spawn(async move {
            let scope = NamespaceScope::from_selection(Some(&namespace));
            match manager.list(scope.as_namespace()).await {
                Ok(items) => {
                    let items = items.iter().map(ResourceRecord::from).collect();
                    store.dispatch(Action::FetchSuccess { namespace, items });
                }
                Err(e) => {
                    tracing::warn!(namespace = %namespace, error = %e, "Failed to fetch PipelineResources");
                    store.dispatch(Action::FetchFailure {
                        message: error_message(&e),
                    });
                }
            }
        });
    }

    fn delete_pipeline_resource(&self, key: ResourceKey) {
        let manager = Arc::clone(&self.manager);
        tokio::spawn(async move {
            match manager.delete(&key.namespace, &key.name).await {
                Ok(()) => {
                    tracing::info!(name = %key.name, namespace = %key.namespace, "PipelineResource deleted")
                }
                Err(e) => tracing::warn!(
                    name = %key.name,
                    namespace = %key.namespace,
                    error = %e,
                    "Failed to delete PipelineResource"
                ),
            }
        });
    }
}
