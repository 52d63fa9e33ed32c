pub mod health;
pub mod pipeline_resources;

use crate::i18n::Intl;
use crate::store::effects::SharedManager;
use crate::store::Store;
use crate::view::driver::SharedView;
use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub view: SharedView,
    pub intl: Arc<Intl>,
    pub manager: SharedManager,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/pipelineresources", get(pipeline_resources::render_view))
        .route("/namespace", put(pipeline_resources::select_namespace))
        .route(
            "/namespaces/:namespace/pipelineresources/:name",
            get(pipeline_resources::get_pipeline_resource)
                .delete(pipeline_resources::delete_pipeline_resource),
        )
        .route(
            "/namespaces/:namespace/pipelineresources/:name/delete",
            get(pipeline_resources::delete_modal),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pipeline_resource::tests::resource;
    use crate::models::{ResourceKey, ResourceRecord};
    use crate::resources::testing::FakeManager;
    use crate::store::actions::Action;
    use crate::view::tests::RecordingActions;
    use crate::view::{map_state_to_props, OwnProps, ResourceListView};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tokio::sync::Mutex;
    use tower::ServiceExt;

    struct Harness {
        state: AppState,
        actions: Arc<RecordingActions>,
    }

    async fn harness() -> Harness {
        let store = Store::default();
        store.dispatch(Action::FetchSuccess {
            namespace: "*".to_string(),
            items: vec![ResourceRecord::new("ns1", "res1", "git")],
        });

        let actions = Arc::new(RecordingActions::default());
        let mut view = ResourceListView::new(actions.clone());
        view.mount(map_state_to_props(&store.snapshot(), &OwnProps::default()));

        let state = AppState {
            store,
            view: Arc::new(Mutex::new(view)),
            intl: Arc::new(Intl::default()),
            manager: Arc::new(FakeManager::with_items(vec![resource("ns1", "res1", "git")])),
        };
        Harness { state, actions }
    }

    async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = router(state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    fn json(body: &[u8]) -> Value {
        serde_json::from_slice(body).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let h = harness().await;
        let (status, body) = send(&h.state, Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&body)["status"], "healthy");
        assert_eq!(json(&body)["liveUpdates"], "disconnected");
    }

    #[tokio::test]
    async fn test_render_view_returns_table() {
        let h = harness().await;
        let (status, body) = send(
            &h.state,
            Request::get("/pipelineresources").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let body = json(&body);
        assert_eq!(body["view"], "page");
        assert_eq!(body["heading"], "PipelineResources");
        assert_eq!(body["table"]["rows"][0]["id"], "ns1:res1");
        assert_eq!(
            body["table"]["rows"][0]["name"]["to"],
            "/namespaces/ns1/pipelineresources/res1"
        );
    }

    #[tokio::test]
    async fn test_delete_without_confirmation_is_rejected() {
        let h = harness().await;
        let (status, body) = send(
            &h.state,
            Request::delete("/namespaces/ns1/pipelineresources/res1")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::PRECONDITION_REQUIRED);
        assert_eq!(
            json(&body)["error"],
            "Are you sure you would like to delete PipelineResource res1?"
        );
        assert!(h.actions.deletes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_confirmed_delete_issues_one_delete() {
        let h = harness().await;
        let (status, _) = send(
            &h.state,
            Request::delete("/namespaces/ns1/pipelineresources/res1?confirmed=true")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(
            *h.actions.deletes.lock().unwrap(),
            vec![ResourceKey::new("ns1", "res1")]
        );
    }

    #[tokio::test]
    async fn test_delete_modal() {
        let h = harness().await;
        let (status, body) = send(
            &h.state,
            Request::get("/namespaces/ns1/pipelineresources/res1/delete")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let body = json(&body);
        assert_eq!(body["heading"], "Delete PipelineResource");
        assert_eq!(body["primaryButtonText"], "Delete PipelineResource");
        assert_eq!(body["secondaryButtonText"], "Cancel");
    }

    #[tokio::test]
    async fn test_invalid_name_rejected() {
        let h = harness().await;
        let (status, _) = send(
            &h.state,
            Request::delete("/namespaces/ns1/pipelineresources/Bad_Name?confirmed=true")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(h.actions.deletes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_pipeline_resource_yaml_and_missing() {
        let h = harness().await;
        let (status, body) = send(
            &h.state,
            Request::get("/namespaces/ns1/pipelineresources/res1?format=yaml")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8(body).unwrap().contains("type: git"));

        let (status, _) = send(
            &h.state,
            Request::get("/namespaces/ns1/pipelineresources/missing")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_select_namespace_updates_store() {
        let h = harness().await;
        let (status, body) = send(
            &h.state,
            Request::put("/namespace")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"namespace":"team-a"}"#))
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&body)["namespace"], "team-a");
        assert_eq!(h.state.store.snapshot().selected_namespace, "team-a");
    }
}
