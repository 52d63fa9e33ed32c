use crate::error::{AppError, Result};
use crate::models::pipeline_resource::PipelineResource;
use crate::resources::ResourceManager;
use async_trait::async_trait;
use kube::{
    api::{Api, DeleteParams, ListParams},
    Client,
};

pub struct PipelineResourceManager {
    client: Client,
}

impl PipelineResourceManager {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api(&self, namespace: Option<&str>) -> Api<PipelineResource> {
        match namespace {
            Some(ns) => Api::namespaced(self.client.clone(), ns),
            None => Api::all(self.client.clone()),
        }
    }
}

fn not_found(namespace: &str, name: &str) -> AppError {
    AppError::NotFound(format!(
        "PipelineResource '{}' not found in namespace '{}'",
        name, namespace
    ))
}

#[async_trait]
impl ResourceManager for PipelineResourceManager {
    type Resource = PipelineResource;

    async fn list(&self, namespace: Option<&str>) -> Result<Vec<PipelineResource>> {
        let list = self.api(namespace).list(&ListParams::default()).await?;
        tracing::debug!(
            namespace = namespace.unwrap_or("*"),
            count = list.items.len(),
            "Listed PipelineResources"
        );
        Ok(list.items)
    }

    async fn get(&self, namespace: &str, name: &str) -> Result<PipelineResource> {
        match self.api(Some(namespace)).get(name).await {
            Ok(resource) => Ok(resource),
            Err(kube::Error::Api(err)) if err.code == 404 => Err(not_found(namespace, name)),
            Err(e) => Err(AppError::Kube(e)),
        }
    }

    async fn delete(&self, namespace: &str, name: &str) -> Result<()> {
        match self.api(Some(namespace)).delete(name, &DeleteParams::default()).await {
            Ok(_) => Ok(()),
            Err(kube::Error::Api(err)) if err.code == 404 => Err(not_found(namespace, name)),
            Err(e) => Err(AppError::Kube(e)),
        }
    }
}
