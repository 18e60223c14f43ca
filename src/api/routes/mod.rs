//! API routes module

pub mod lifecycle;
pub mod notifications;
pub mod push;
pub mod windows;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Install / activate events and cache status
        .nest("/lifecycle", lifecycle::router())
        // Push message delivery
        .nest("/push", push::router())
        // Shown notifications and clicks on them
        .nest("/notifications", notifications::router())
        // Open application windows
        .nest("/windows", windows::router())
}
