use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Message handed over by the push transport. `data` is absent when the
/// sender attached no payload.
#[derive(Clone, Debug, Default)]
pub struct PushMessage {
    pub data: Option<Bytes>,
}

impl PushMessage {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: Some(data.into()),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.data
            .as_ref()
            .map(|d| String::from_utf8_lossy(d).into_owned())
            .unwrap_or_default()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NotificationAction {
    pub action: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Everything a push payload may carry. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PushPayload {
    pub title: Option<String>,
    pub body: Option<String>,
    pub icon: Option<String>,
    pub badge: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
    pub actions: Option<Vec<NotificationAction>>,
    // Shown notifications with the same tag are replaced rather than
    // stacked.
    pub tag: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
/// Application data attached to a notification and read back when it is
/// clicked.
pub struct NotificationData {
    // The URL to focus or open when the notification is clicked
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NotificationOptions {
    pub body: String,
    pub icon: String,
    pub badge: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub vibrate: Vec<u32>,
    pub actions: Vec<NotificationAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub data: NotificationData,
}

/// A fully populated notification ready to be shown
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NotificationRecord {
    pub title: String,
    #[serde(flatten)]
    pub options: NotificationOptions,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationState {
    Shown,
    Closed,
}

pub type NotificationId = u64;

/// A notification as displayed by the host
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub state: NotificationState,
    #[serde(flatten)]
    pub record: NotificationRecord,
}

impl Notification {
    pub fn target_url(&self) -> &str {
        &self.record.options.data.url
    }
}
