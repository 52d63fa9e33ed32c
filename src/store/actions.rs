use crate::models::{ResourceKey, ResourceRecord};

/// Every state transition the store accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FetchRequest { namespace: String },
    FetchSuccess { namespace: String, items: Vec<ResourceRecord> },
    FetchFailure { message: String },

    // Live channel
    ResourceUpserted(ResourceRecord),
    ResourceDeleted(ResourceKey),
    LiveConnected,
    LiveDisconnected,

    SelectNamespace(String),
}
