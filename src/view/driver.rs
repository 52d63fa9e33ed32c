//! Keeps a mounted view in sync with the store.

use super::{map_state_to_props, OwnProps, ResourceListView};
use crate::store::Store;
use std::sync::Arc;
use tokio::sync::Mutex;

pub type SharedView = Arc<Mutex<ResourceListView>>;

/// Mounts `view`, then feeds it fresh props after every store update until
/// the store is dropped.
pub async fn run(store: Store, view: SharedView, own_props: OwnProps) {
    let mut rx = store.subscribe();
    drop(store);

    let props = map_state_to_props(&rx.borrow_and_update(), &own_props);
    view.lock().await.mount(props);

    while rx.changed().await.is_ok() {
        let props = map_state_to_props(&rx.borrow_and_update(), &own_props);
        let mut guard = view.lock().await;
        guard.update(props);
        tracing::trace!(lifecycle = ?guard.lifecycle(), "PipelineResources view updated");
    }

    tracing::debug!("Store closed, unmounting PipelineResources view");
    view.lock().await.unmount();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::actions::Action;
    use crate::view::tests::RecordingActions;
    use crate::view::Lifecycle;
    use std::time::Duration;

    async fn wait_for_fetches(actions: &RecordingActions, count: usize) -> Vec<String> {
        tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                {
                    let fetches = actions.fetches.lock().unwrap();
                    if fetches.len() >= count {
                        return fetches.iter().map(|p| p.namespace.clone()).collect();
                    }
                }
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("expected fetches were not issued")
    }

    #[tokio::test]
    async fn test_driver_refetches_on_namespace_and_reconnect() {
        let store = Store::default();
        let actions = Arc::new(RecordingActions::default());
        let view: SharedView = Arc::new(Mutex::new(ResourceListView::new(actions.clone())));

        let handle = tokio::spawn(run(store.clone(), Arc::clone(&view), OwnProps::default()));
        assert_eq!(wait_for_fetches(&actions, 1).await, vec!["*"]);

        store.dispatch(Action::SelectNamespace("team-b".to_string()));
        assert_eq!(wait_for_fetches(&actions, 2).await, vec!["*", "team-b"]);

        store.dispatch(Action::LiveConnected);
        assert_eq!(
            wait_for_fetches(&actions, 3).await,
            vec!["*", "team-b", "team-b"]
        );

        drop(store);
        handle.await.unwrap();
        assert_eq!(view.lock().await.lifecycle(), Lifecycle::Unmounted);
        assert_eq!(actions.fetches.lock().unwrap().len(), 3);
    }
}
