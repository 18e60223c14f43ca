use anyhow::Result;
use serde::Serialize;

use super::{Notification, NotificationHost, payload::DEFAULT_URL};
use crate::clients::{ClientQuery, Clients, WindowId};

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "outcome", content = "window", rename_all = "lowercase")]
pub enum ClickOutcome {
    /// An open window already showed the target and was brought forward
    Focused(WindowId),
    /// A new window was opened at the target. The host may not expose it.
    Opened(Option<WindowId>),
    /// No matching window and the host cannot open one
    Ignored,
}

/// Close a clicked notification and bring its target into view.
///
/// The first window (in host order, uncontrolled ones included) whose URL
/// contains the target is focused. Otherwise a new window is opened when
/// the host supports it.
pub async fn route_click(
    notifications: &dyn NotificationHost,
    clients: &dyn Clients,
    notification: &Notification,
) -> Result<ClickOutcome> {
    // Already gone from the tray is fine, the click still navigates
    if let Err(e) = notifications.close(notification.id).await {
        tracing::debug!("Failed to close notification {}: {:#}", notification.id, e);
    }

    let target = match notification.target_url() {
        "" => DEFAULT_URL,
        url => url,
    };

    let windows = clients
        .match_all(ClientQuery {
            include_uncontrolled: true,
        })
        .await?;

    if let Some(window) = windows.iter().find(|w| w.url.contains(target)) {
        let focused = clients.focus(window.id).await?;
        return Ok(ClickOutcome::Focused(focused.id));
    }

    if clients.can_open_window() {
        let opened = clients.open_window(target).await?;
        return Ok(ClickOutcome::Opened(opened.map(|w| w.id)));
    }

    tracing::debug!("No window matches {} and none can be opened", target);
    Ok(ClickOutcome::Ignored)
}
