use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Error,
}

/// Inline notification that replaces the page content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineNotification {
    pub kind: NotificationKind,
    pub title: String,
    pub subtitle: String,
    pub hide_close_button: bool,
    pub low_contrast: bool,
}

impl InlineNotification {
    pub fn error(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            subtitle: subtitle.into(),
            hide_close_button: true,
            low_contrast: true,
        }
    }
}
