//! Reusable table model.
//!
//! Callers supply headers, rows, the loading flag and the selected
//! namespace; the empty-state policy lives here.

use crate::models::NamespaceScope;
use crate::view::modal::RowAction;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub key: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub to: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub id: String,
    pub name: Link,
    pub namespace: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub dropdown: Vec<RowAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub headers: Vec<Header>,
    pub rows: Vec<Row>,
    pub loading: bool,
    pub selected_namespace: String,
    pub empty_text_all_namespaces: String,
    pub empty_text_selected_namespace: String,
    /// Message shown in place of rows, if any.
    pub empty_text: Option<String>,
}

impl Table {
    pub fn new(
        headers: Vec<Header>,
        rows: Vec<Row>,
        loading: bool,
        selected_namespace: &str,
        empty_text_all_namespaces: String,
        empty_text_selected_namespace: String,
    ) -> Self {
        let empty_text = if rows.is_empty() && !loading {
            match NamespaceScope::from_selection(Some(selected_namespace)) {
                NamespaceScope::All => Some(empty_text_all_namespaces.clone()),
                NamespaceScope::Named(_) => Some(empty_text_selected_namespace.clone()),
            }
        } else {
            None
        };

        Self {
            headers,
            rows,
            loading,
            selected_namespace: selected_namespace.to_string(),
            empty_text_all_namespaces,
            empty_text_selected_namespace,
            empty_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty(loading: bool, namespace: &str) -> Table {
        Table::new(
            vec![],
            vec![],
            loading,
            namespace,
            "all".to_string(),
            "selected".to_string(),
        )
    }

    #[test]
    fn test_empty_text_by_scope() {
        assert_eq!(empty(false, "*").empty_text.as_deref(), Some("all"));
        assert_eq!(empty(false, "").empty_text.as_deref(), Some("all"));
        assert_eq!(empty(false, "team-a").empty_text.as_deref(), Some("selected"));
    }

    #[test]
    fn test_no_empty_text_while_loading() {
        assert_eq!(empty(true, "team-a").empty_text, None);
    }
}
