//! Dashboard route builders.

pub mod pipeline_resources {
    pub fn by_name(namespace: &str, name: &str) -> String {
        format!("/namespaces/{}/pipelineresources/{}", namespace, name)
    }
}
