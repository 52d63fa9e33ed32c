use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[kube(group = "tekton.dev", version = "v1alpha1", kind = "PipelineResource")]
#[kube(namespaced)]
pub struct PipelineResourceSpec {
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(default)]
    pub params: Vec<ResourceParam>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secrets: Option<Vec<SecretParam>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ResourceParam {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct SecretParam {
    #[serde(rename = "fieldName")]
    pub field_name: String,
    #[serde(rename = "secretKey")]
    pub secret_key: String,
    #[serde(rename = "secretName")]
    pub secret_name: String,
}
