//! Public types for the push API
//!
//! The request body is the raw push message: a JSON record or plain text.
//! The response is the notification that was shown.
pub use crate::notify::{Notification, NotificationAction, NotificationState};
