//! Row actions and the delete confirmation gate.

use crate::i18n::{messages, Intl};
use crate::models::ResourceKey;
use crate::view::ViewActions;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalProperties {
    pub heading: String,
    pub body: String,
    pub primary_button_text: String,
    pub secondary_button_text: String,
}

impl ModalProperties {
    pub fn delete_pipeline_resource(intl: &Intl, name: &str) -> Self {
        Self {
            heading: intl.format_message(messages::DELETE_HEADING, &[]),
            body: intl.format_message(messages::DELETE_BODY, &[("name", name)]),
            primary_button_text: intl.format_message(messages::DELETE_PRIMARY_TEXT, &[]),
            secondary_button_text: intl.format_message(messages::MODAL_CANCEL_BUTTON, &[]),
        }
    }
}

/// One entry in a row's action dropdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowAction {
    pub action_text: String,
    pub modal_properties: ModalProperties,
}

/// A pending delete. Dropping it without confirming issues nothing.
#[must_use = "a delete is only issued by calling confirm()"]
pub struct DeleteConfirmation {
    key: ResourceKey,
    modal: ModalProperties,
    actions: Arc<dyn ViewActions>,
}

impl DeleteConfirmation {
    pub(crate) fn new(key: ResourceKey, modal: ModalProperties, actions: Arc<dyn ViewActions>) -> Self {
        Self { key, modal, actions }
    }

    pub fn modal(&self) -> &ModalProperties {
        &self.modal
    }

    pub fn confirm(self) {
        tracing::info!(name = %self.key.name, namespace = %self.key.namespace, "Delete confirmed");
        self.actions.delete_pipeline_resource(self.key);
    }

    pub fn cancel(self) -> ModalProperties {
        tracing::debug!(name = %self.key.name, namespace = %self.key.namespace, "Delete cancelled");
        self.modal
    }
}
