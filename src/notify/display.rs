use anyhow::Result;

use super::{Notification, NotificationDefaults, NotificationHost, PushMessage, PushPayload};

/// Turn a push message into a displayed notification.
///
/// Payload problems never fail: missing or malformed fields fall back to
/// `defaults`. A host refusing to display does.
pub async fn show_push(
    host: &dyn NotificationHost,
    defaults: &NotificationDefaults,
    message: &PushMessage,
) -> Result<Notification> {
    let record = defaults.merge(PushPayload::parse(message));
    tracing::debug!(
        "Showing notification \"{}\" targeting {}",
        record.title,
        record.options.data.url
    );
    host.show_notification(record).await
}
