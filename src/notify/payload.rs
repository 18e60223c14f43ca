//! Push payload decoding and default substitution

use serde_json::{Map, Value};

use super::models::{
    NotificationAction, NotificationData, NotificationOptions, NotificationRecord, PushMessage,
    PushPayload,
};

pub const DEFAULT_TITLE: &str = "📢 Notification";
pub const DEFAULT_ICON: &str = "/noti.png";
pub const DEFAULT_URL: &str = "/";
pub const VIBRATE_PATTERN: [u32; 3] = [100, 50, 100];

impl PushPayload {
    /// Decode a push message.
    ///
    /// A JSON object supplies the recognized fields. Any other JSON value
    /// supplies none. A body that is not JSON at all (or no body) becomes
    /// the notification text.
    pub fn parse(message: &PushMessage) -> Self {
        let Some(data) = &message.data else {
            return Self::plain_text(String::new());
        };

        match serde_json::from_slice::<Value>(data) {
            Ok(Value::Object(map)) => Self::from_object(&map),
            Ok(_) => Self::default(),
            Err(_) => Self::plain_text(message.text()),
        }
    }

    fn plain_text(text: String) -> Self {
        Self {
            body: Some(text),
            ..Self::default()
        }
    }

    fn from_object(map: &Map<String, Value>) -> Self {
        let actions = map
            .get("actions")
            .and_then(|v| serde_json::from_value::<Vec<NotificationAction>>(v.clone()).ok());

        Self {
            title: string_field(map, "title"),
            body: string_field(map, "body"),
            icon: string_field(map, "icon"),
            badge: string_field(map, "badge"),
            image: string_field(map, "image"),
            url: string_field(map, "url"),
            actions,
            tag: string_field(map, "tag"),
        }
    }
}

// Empty strings and non-string values count as missing
fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Values substituted for every field a push payload leaves out
#[derive(Clone, Debug)]
pub struct NotificationDefaults {
    pub title: String,
    pub body: String,
    pub icon: String,
    pub badge: String,
    pub url: String,
    pub vibrate: Vec<u32>,
}

impl Default for NotificationDefaults {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            body: String::new(),
            icon: DEFAULT_ICON.to_string(),
            badge: DEFAULT_ICON.to_string(),
            url: DEFAULT_URL.to_string(),
            vibrate: VIBRATE_PATTERN.to_vec(),
        }
    }
}

impl NotificationDefaults {
    pub fn merge(&self, payload: PushPayload) -> NotificationRecord {
        let PushPayload {
            title,
            body,
            icon,
            badge,
            image,
            url,
            actions,
            tag,
        } = payload;

        NotificationRecord {
            title: non_empty(title).unwrap_or_else(|| self.title.clone()),
            options: NotificationOptions {
                body: non_empty(body).unwrap_or_else(|| self.body.clone()),
                icon: non_empty(icon).unwrap_or_else(|| self.icon.clone()),
                badge: non_empty(badge).unwrap_or_else(|| self.badge.clone()),
                image: non_empty(image),
                vibrate: self.vibrate.clone(),
                actions: actions.unwrap_or_default(),
                tag: non_empty(tag),
                data: NotificationData {
                    url: non_empty(url).unwrap_or_else(|| self.url.clone()),
                },
            },
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
