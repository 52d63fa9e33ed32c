pub mod pipeline_resource;

use crate::error::Result;

#[async_trait::async_trait]
pub trait ResourceManager: Send + Sync {
    type Resource;

    /// Lists resources in `namespace`, or across the cluster when `None`.
    async fn list(&self, namespace: Option<&str>) -> Result<Vec<Self::Resource>>;
    async fn get(&self, namespace: &str, name: &str) -> Result<Self::Resource>;
    async fn delete(&self, namespace: &str, name: &str) -> Result<()>;
}
