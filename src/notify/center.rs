//! In-memory notification tray used by the local host

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Notification, NotificationHost, NotificationId, NotificationRecord, NotificationState};

#[derive(Debug)]
pub struct NotificationCenter {
    permitted: bool,
    next_id: AtomicU64,
    notifications: RwLock<Vec<Notification>>,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self {
            permitted: true,
            next_id: AtomicU64::new(1),
            notifications: RwLock::new(Vec::new()),
        }
    }
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tray whose notification permission has been revoked
    pub fn denied() -> Self {
        Self {
            permitted: false,
            ..Self::default()
        }
    }

    /// Notifications currently on screen, oldest first
    pub async fn shown(&self) -> Vec<Notification> {
        self.notifications.read().await.clone()
    }

    pub async fn get(&self, id: NotificationId) -> Option<Notification> {
        let notifications = self.notifications.read().await;
        notifications.iter().find(|n| n.id == id).cloned()
    }
}

#[async_trait]
impl NotificationHost for NotificationCenter {
    async fn show_notification(&self, record: NotificationRecord) -> Result<Notification> {
        if !self.permitted {
            return Err(anyhow!("Notification permission denied"));
        }

        let notification = Notification {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            state: NotificationState::Shown,
            record,
        };

        let mut notifications = self.notifications.write().await;
        if let Some(tag) = &notification.record.options.tag {
            notifications.retain(|existing| existing.record.options.tag.as_ref() != Some(tag));
        }
        notifications.push(notification.clone());

        Ok(notification)
    }

    async fn close(&self, id: NotificationId) -> Result<()> {
        // Closed notifications are dropped from the tray
        let mut notifications = self.notifications.write().await;
        let before = notifications.len();
        notifications.retain(|n| n.id != id);
        if notifications.len() == before {
            return Err(anyhow!("No notification with id {}", id));
        }
        Ok(())
    }
}
