//! Public types for the notifications API
pub use crate::notify::{ClickOutcome, Notification};
