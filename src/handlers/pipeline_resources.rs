use super::AppState;
use crate::error::{AppError, Result};
use crate::models::{DeleteQuery, DetailQuery, ResourceKey, SelectNamespaceRequest, ALL_NAMESPACES};
use crate::store::actions::Action;
use crate::utils::validation;
use crate::view::modal::ModalProperties;
use crate::view::Rendered;
use axum::{
    extract::{Json, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json as ResponseJson, Response},
};
use serde_json::{json, Value};

pub async fn render_view(State(state): State<AppState>) -> Result<ResponseJson<Rendered>> {
    let view = state.view.lock().await;
    view.render(&state.intl)
        .map(ResponseJson)
        .ok_or_else(|| AppError::Internal("PipelineResources view is not mounted".to_string()))
}

pub async fn select_namespace(
    State(state): State<AppState>,
    Json(payload): Json<SelectNamespaceRequest>,
) -> Result<ResponseJson<Value>> {
    let namespace = payload.namespace.unwrap_or_default();
    if !namespace.is_empty() && namespace != ALL_NAMESPACES {
        validation::validate_namespace(&namespace)?;
    }

    state.store.dispatch(Action::SelectNamespace(namespace));
    let selected = state.store.snapshot().selected_namespace;
    tracing::info!(namespace = %selected, "Namespace selected");

    Ok(ResponseJson(json!({ "namespace": selected })))
}

pub async fn get_pipeline_resource(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
    Query(query): Query<DetailQuery>,
) -> Result<Response> {
    validation::validate_namespace(&namespace)?;
    validation::validate_resource_name(&name)?;

    let resource = state.manager.get(&namespace, &name).await?;

    match query.format.as_deref() {
        Some("yaml") => {
            let body = serde_yaml::to_string(&resource)?;
            Ok(([(header::CONTENT_TYPE, "application/yaml")], body).into_response())
        }
        Some("json") | None => Ok(ResponseJson(serde_json::to_value(resource)?).into_response()),
        Some(other) => Err(AppError::BadRequest(format!(
            "Unsupported format '{}', expected 'json' or 'yaml'",
            other
        ))),
    }
}

pub async fn delete_modal(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<ResponseJson<ModalProperties>> {
    validation::validate_namespace(&namespace)?;
    validation::validate_resource_name(&name)?;

    Ok(ResponseJson(ModalProperties::delete_pipeline_resource(
        &state.intl,
        &name,
    )))
}

pub async fn delete_pipeline_resource(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
    Query(query): Query<DeleteQuery>,
) -> Result<(StatusCode, ResponseJson<Value>)> {
    validation::validate_namespace(&namespace)?;
    validation::validate_resource_name(&name)?;

    let confirmation = state
        .view
        .lock()
        .await
        .request_delete(ResourceKey::new(&namespace, &name), &state.intl);

    if !query.confirmed {
        let modal = confirmation.cancel();
        return Err(AppError::ConfirmationRequired(modal.body));
    }
    confirmation.confirm();

    Ok((
        StatusCode::ACCEPTED,
        ResponseJson(json!({
            "message": format!("Deletion of PipelineResource '{}' requested", name),
            "name": name,
            "namespace": namespace
        })),
    ))
}
