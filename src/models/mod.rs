pub mod pipeline_resource;

use serde::{Deserialize, Serialize};
use std::fmt;

use pipeline_resource::PipelineResource;
use kube::ResourceExt;

#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    pub format: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    pub confirmed: bool,
}

#[derive(Debug, Deserialize)]
pub struct SelectNamespaceRequest {
    #[serde(default)]
    pub namespace: Option<String>,
}

/// Composite key identifying a resource record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ResourceKey {
    pub namespace: String,
    pub name: String,
}

impl ResourceKey {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.name)
    }
}

/// The slice of a PipelineResource the list view displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    pub namespace: String,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: String,
}

impl ResourceRecord {
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        resource_type: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            resource_type: resource_type.into(),
        }
    }

    pub fn key(&self) -> ResourceKey {
        ResourceKey::new(&self.namespace, &self.name)
    }
}

impl From<&PipelineResource> for ResourceRecord {
    fn from(resource: &PipelineResource) -> Self {
        Self {
            namespace: resource.namespace().unwrap_or_default(),
            name: resource.name_any(),
            resource_type: resource.spec.resource_type.clone(),
        }
    }
}

/// Which namespaces a view is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceScope {
    All,
    Named(String),
}

impl NamespaceScope {
    /// Empty, unset and `*` all select every namespace.
    pub fn from_selection(selection: Option<&str>) -> Self {
        match selection {
            None | Some("") | Some(ALL_NAMESPACES) => NamespaceScope::All,
            Some(ns) => NamespaceScope::Named(ns.to_string()),
        }
    }

    pub fn as_namespace(&self) -> Option<&str> {
        match self {
            NamespaceScope::All => None,
            NamespaceScope::Named(ns) => Some(ns),
        }
    }

    pub fn contains(&self, namespace: &str) -> bool {
        match self {
            NamespaceScope::All => true,
            NamespaceScope::Named(ns) => ns == namespace,
        }
    }
}

pub const ALL_NAMESPACES: &str = "*";
