pub mod center;
pub mod click;
pub mod display;
pub mod models;
pub mod payload;
pub use center::NotificationCenter;
pub use click::{ClickOutcome, route_click};
pub use display::show_push;
pub use models::*;
pub use payload::NotificationDefaults;

use anyhow::Result;
use async_trait::async_trait;

/// System notification surface provided by the host
#[async_trait]
pub trait NotificationHost: Send + Sync {
    /// Fails when the host refuses to display, e.g. permission revoked
    async fn show_notification(&self, record: NotificationRecord) -> Result<Notification>;

    async fn close(&self, id: NotificationId) -> Result<()>;
}
