//! The PipelineResources list view.
//!
//! Props are a pure projection of the store ([`map_state_to_props`]). The
//! view itself only remembers the last props it saw so that [`update`]
//! can decide whether a transition warrants a refetch.
//!
//! [`update`]: ResourceListView::update

pub mod driver;
pub mod modal;
pub mod notification;
pub mod table;

use crate::i18n::{messages, Intl};
use crate::models::{ResourceKey, ResourceRecord};
use crate::store::selectors::*;
use crate::store::StoreState;
use crate::urls;
use modal::{DeleteConfirmation, ModalProperties, RowAction};
use notification::InlineNotification;
use serde::Serialize;
use std::sync::Arc;
use table::{Header, Link, Row, Table};

pub const RESOURCE_KIND: &str = "PipelineResources";
pub const ERROR_TITLE: &str = "Error loading PipelineResources";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchParams {
    pub namespace: String,
}

/// Outgoing calls the view makes. Both are fire-and-forget.
pub trait ViewActions: Send + Sync {
    fn fetch_pipeline_resources(&self, params: FetchParams);
    fn delete_pipeline_resource(&self, key: ResourceKey);
}

/// Props supplied by the route rather than the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnProps {
    pub namespace: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewProps {
    pub error: Option<String>,
    pub loading: bool,
    pub namespace: String,
    pub pipeline_resources: Vec<ResourceRecord>,
    pub connected: bool,
}

pub fn map_state_to_props(state: &StoreState, own_props: &OwnProps) -> ViewProps {
    let namespace = own_props
        .namespace
        .clone()
        .filter(|ns| !ns.is_empty())
        .unwrap_or_else(|| get_selected_namespace(state).to_string());

    ViewProps {
        error: get_pipeline_resources_error_message(state).map(str::to_string),
        loading: is_fetching_pipeline_resources(state),
        pipeline_resources: get_pipeline_resources(state, &namespace),
        namespace,
        connected: is_live_connected(state),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Unmounted,
    Fetching,
    Loaded,
    Errored,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum Rendered {
    Notification(InlineNotification),
    Page { heading: String, table: Table },
}

pub struct ResourceListView {
    props: Option<ViewProps>,
    actions: Arc<dyn ViewActions>,
}

impl ResourceListView {
    pub fn new(actions: Arc<dyn ViewActions>) -> Self {
        Self {
            props: None,
            actions,
        }
    }

    pub fn mount(&mut self, props: ViewProps) {
        tracing::debug!(namespace = %props.namespace, "Mounting PipelineResources view");
        let namespace = props.namespace.clone();
        self.props = Some(props);
        self.fetch(namespace);
    }

    /// Applies new props, refetching when the namespace changed or the live
    /// channel came back. Returns whether a fetch was issued.
    pub fn update(&mut self, next: ViewProps) -> bool {
        let Some(prev) = self.props.as_ref() else {
            tracing::debug!("Ignoring props update for an unmounted view");
            return false;
        };

        let namespace_changed = prev.namespace != next.namespace;
        let reconnected = next.connected && !prev.connected;
        let namespace = next.namespace.clone();
        self.props = Some(next);

        if namespace_changed || reconnected {
            tracing::debug!(%namespace, namespace_changed, reconnected, "Refetching PipelineResources");
            self.fetch(namespace);
            true
        } else {
            false
        }
    }

    pub fn unmount(&mut self) {
        self.props = None;
    }

    pub fn lifecycle(&self) -> Lifecycle {
        match &self.props {
            None => Lifecycle::Unmounted,
            Some(p) if p.loading => Lifecycle::Fetching,
            Some(p) if p.error.is_some() => Lifecycle::Errored,
            Some(_) => Lifecycle::Loaded,
        }
    }

    fn fetch(&self, namespace: String) {
        self.actions
            .fetch_pipeline_resources(FetchParams { namespace });
    }

    /// Builds the confirmation for deleting `key`. Nothing is deleted until
    /// the returned value is confirmed.
    pub fn request_delete(&self, key: ResourceKey, intl: &Intl) -> DeleteConfirmation {
        let modal = ModalProperties::delete_pipeline_resource(intl, &key.name);
        DeleteConfirmation::new(key, modal, Arc::clone(&self.actions))
    }

    fn row_actions(intl: &Intl, record: &ResourceRecord) -> Vec<RowAction> {
        vec![RowAction {
            action_text: intl.format_message(messages::DELETE_ACTION_TEXT, &[]),
            modal_properties: ModalProperties::delete_pipeline_resource(intl, &record.name),
        }]
    }

    pub fn render(&self, intl: &Intl) -> Option<Rendered> {
        let props = self.props.as_ref()?;

        if let Some(error) = &props.error {
            return Some(Rendered::Notification(InlineNotification::error(
                ERROR_TITLE,
                error.clone(),
            )));
        }

        let headers = vec![
            Header {
                key: "name",
                header: Some(intl.format_message(messages::TABLE_HEADER_NAME, &[])),
            },
            Header {
                key: "namespace",
                header: Some(intl.format_message(messages::TABLE_HEADER_NAMESPACE, &[])),
            },
            Header {
                key: "type",
                header: Some(intl.format_message(messages::TABLE_HEADER_TYPE, &[])),
            },
            Header {
                key: "dropdown",
                header: None,
            },
        ];

        let rows = props
            .pipeline_resources
            .iter()
            .map(|record| Row {
                id: record.key().to_string(),
                name: Link {
                    to: urls::pipeline_resources::by_name(&record.namespace, &record.name),
                    text: record.name.clone(),
                },
                namespace: record.namespace.clone(),
                resource_type: record.resource_type.clone(),
                dropdown: Self::row_actions(intl, record),
            })
            .collect();

        let table = Table::new(
            headers,
            rows,
            props.loading,
            &props.namespace,
            intl.format_message(
                messages::EMPTY_STATE_ALL_NAMESPACES,
                &[("kind", RESOURCE_KIND)],
            ),
            intl.format_message(
                messages::EMPTY_STATE_SELECTED_NAMESPACE,
                &[("kind", RESOURCE_KIND), ("selectedNamespace", props.namespace.as_str())],
            ),
        );

        Some(Rendered::Page {
            heading: RESOURCE_KIND.to_string(),
            table,
        })
    }
}
