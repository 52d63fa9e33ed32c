//! Message catalog for the PipelineResources page.
//!
//! Every user-facing string is looked up by id; the default template is used
//! unless the active locale supplies an override. Templates interpolate
//! `{param}` placeholders by name.

use crate::error::{AppError, Result};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageDescriptor {
    pub id: &'static str,
    pub default_message: &'static str,
}

pub mod messages {
    use super::MessageDescriptor;

    pub const DELETE_ACTION_TEXT: MessageDescriptor = MessageDescriptor {
        id: "dashboard.deletePipelineResource.actionText",
        default_message: "Delete",
    };
    pub const DELETE_HEADING: MessageDescriptor = MessageDescriptor {
        id: "dashboard.deletePipelineResource.heading",
        default_message: "Delete PipelineResource",
    };
    pub const DELETE_PRIMARY_TEXT: MessageDescriptor = MessageDescriptor {
        id: "dashboard.deletePipelineResource.primaryText",
        default_message: "Delete PipelineResource",
    };
    pub const MODAL_CANCEL_BUTTON: MessageDescriptor = MessageDescriptor {
        id: "dashboard.modal.cancelButton",
        default_message: "Cancel",
    };
    pub const DELETE_BODY: MessageDescriptor = MessageDescriptor {
        id: "dashboard.deletePipelineResource.body",
        default_message: "Are you sure you would like to delete PipelineResource {name}?",
    };
    pub const TABLE_HEADER_NAME: MessageDescriptor = MessageDescriptor {
        id: "dashboard.tableHeader.name",
        default_message: "Name",
    };
    pub const TABLE_HEADER_NAMESPACE: MessageDescriptor = MessageDescriptor {
        id: "dashboard.tableHeader.namespace",
        default_message: "Namespace",
    };
    pub const TABLE_HEADER_TYPE: MessageDescriptor = MessageDescriptor {
        id: "dashboard.tableHeader.type",
        default_message: "Type",
    };
    pub const EMPTY_STATE_ALL_NAMESPACES: MessageDescriptor = MessageDescriptor {
        id: "dashboard.emptyState.allNamespaces",
        default_message: "No {kind} under any namespace.",
    };
    pub const EMPTY_STATE_SELECTED_NAMESPACE: MessageDescriptor = MessageDescriptor {
        id: "dashboard.emptyState.selectedNamespace",
        default_message: "No {kind} under namespace {selectedNamespace}",
    };
}

/// Resolves message descriptors for one locale.
#[derive(Debug, Clone, Default)]
pub struct Intl {
    overrides: HashMap<String, String>,
}

impl Intl {
    pub fn new(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    /// Loads a flat `{ "message.id": "template" }` JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read messages file {}: {}", path.display(), e))
        })?;
        let overrides: HashMap<String, String> = serde_json::from_str(&raw)?;
        tracing::info!(path = %path.display(), count = overrides.len(), "Loaded message overrides");
        Ok(Self::new(overrides))
    }

    pub fn format_message(&self, descriptor: MessageDescriptor, params: &[(&str, &str)]) -> String {
        let template = self
            .overrides
            .get(descriptor.id)
            .map(String::as_str)
            .unwrap_or(descriptor.default_message);
        interpolate(template, params)
    }
}

/// Unknown placeholders are kept verbatim so a missing param stays visible.
fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match tail.find('}') {
            Some(end) => {
                let key = &tail[1..end];
                match params.iter().find(|(name, _)| *name == key) {
                    Some((_, value)) => out.push_str(value),
                    None => out.push_str(&tail[..=end]),
                }
                rest = &tail[end + 1..];
            }
            None => {
                out.push_str(tail);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
