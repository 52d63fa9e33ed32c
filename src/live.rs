//! Live update channel.
//!
//! Watches PipelineResources across the cluster and mirrors changes into the
//! store. Connectivity is reported so the list view can refetch after the
//! channel recovers from an outage.

use crate::models::pipeline_resource::PipelineResource;
use crate::models::ResourceRecord;
use crate::store::actions::Action;
use crate::store::Store;
use futures::StreamExt;
use kube::{
    runtime::{watcher, WatchStreamExt},
    Api, Client,
};

pub async fn run(client: Client, store: Store) {
    let api: Api<PipelineResource> = Api::all(client);
    let mut stream = watcher(api, watcher::Config::default())
        .default_backoff()
        .boxed();
    let mut connected = false;

    tracing::info!("Watching PipelineResources");

    while let Some(item) = stream.next().await {
        match item {
            Ok(event) => {
                if !connected && establishes_connection(&event) {
                    connected = true;
                    tracing::info!("Live updates connected");
                    store.dispatch(Action::LiveConnected);
                }
                for action in actions_for_event(event) {
                    store.dispatch(action);
                }
            }
            Err(e) => {
                if connected {
                    connected = false;
                    tracing::warn!(error = %e, "Live updates disconnected");
                    store.dispatch(Action::LiveDisconnected);
                } else {
                    tracing::debug!(error = %e, "Live updates still unavailable");
                }
            }
        }
    }
}

/// `Init` only announces a relist; the channel is up once the list
/// completes or a watch event arrives.
fn establishes_connection(event: &watcher::Event<PipelineResource>) -> bool {
    !matches!(event, watcher::Event::Init | watcher::Event::InitApply(_))
}

fn actions_for_event(event: watcher::Event<PipelineResource>) -> Vec<Action> {
    match event {
        watcher::Event::Apply(resource) | watcher::Event::InitApply(resource) => {
            vec![Action::ResourceUpserted(ResourceRecord::from(&resource))]
        }
        watcher::Event::Delete(resource) => {
            vec![Action::ResourceDeleted(ResourceRecord::from(&resource).key())]
        }
        watcher::Event::Init | watcher::Event::InitDone => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pipeline_resource::tests::resource;
    use crate::models::ResourceKey;

    #[test]
    fn test_actions_for_event() {
        assert_eq!(
            actions_for_event(watcher::Event::Apply(resource("ns1", "res1", "git"))),
            vec![Action::ResourceUpserted(ResourceRecord::new("ns1", "res1", "git"))]
        );
        assert_eq!(
            actions_for_event(watcher::Event::Delete(resource("ns1", "res1", "git"))),
            vec![Action::ResourceDeleted(ResourceKey::new("ns1", "res1"))]
        );
        assert!(actions_for_event(watcher::Event::InitDone).is_empty());
    }

    #[test]
    fn test_connection_established_after_relist() {
        assert!(!establishes_connection(&watcher::Event::Init));
        assert!(!establishes_connection(&watcher::Event::InitApply(resource("ns1", "res1", "git"))));
        assert!(establishes_connection(&watcher::Event::InitDone));
        assert!(establishes_connection(&watcher::Event::Apply(resource("ns1", "res1", "git"))));
    }
}
