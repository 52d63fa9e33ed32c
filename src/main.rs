mod config;
mod error;
mod handlers;
mod i18n;
mod live;
mod models;
mod resources;
mod store;
mod urls;
mod utils;
mod view;

use clap::Parser;
use config::Config;
use error::{AppError, Result};
use handlers::AppState;
use i18n::Intl;
use kube::Client;
use resources::pipeline_resource::PipelineResourceManager;
use std::sync::Arc;
use store::{actions::Action, effects::StoreActions, Store, StoreState};
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;
use view::{OwnProps, ResourceListView};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();

    let intl = match &config.messages {
        Some(path) => Intl::from_file(path)?,
        None => Intl::default(),
    };

    let client = Client::try_default()
        .await
        .map_err(|e| AppError::Config(format!("Failed to create Kubernetes client: {}", e)))?;

    let store = Store::new(StoreState::default());
    store.dispatch(Action::SelectNamespace(config.selected_namespace.clone()));

    let manager = Arc::new(PipelineResourceManager::new(client.clone()));
    let actions = Arc::new(StoreActions::new(store.clone(), manager.clone()));
    let view = Arc::new(Mutex::new(ResourceListView::new(actions)));

    let own_props = OwnProps {
        namespace: config.namespace.clone(),
    };
    tokio::spawn(view::driver::run(store.clone(), Arc::clone(&view), own_props));

    if config.no_watch {
        tracing::info!("Live updates disabled");
    } else {
        tokio::spawn(live::run(client, store.clone()));
    }

    let app = handlers::router(AppState {
        store,
        view,
        intl: Arc::new(intl),
        manager,
    });

    let listener = tokio::net::TcpListener::bind(config.bind).await?;

    tracing::info!("PipelineResource dashboard listening on {}", listener.local_addr()?);
    tracing::info!("API endpoints:");
    tracing::info!("  Health: GET /health");
    tracing::info!("  View: GET /pipelineresources");
    tracing::info!("  Namespace selection: PUT /namespace");
    tracing::info!("  Resources: /namespaces/:namespace/pipelineresources/:name");

    axum::serve(listener, app).await?;
    Ok(())
}
