//! Router for the push API

use std::sync::{Arc, RwLock};

use axum::{Json, Router, body::Bytes, extract::State};

use super::public::Notification;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::notify::PushMessage;

type SharedState = Arc<RwLock<AppState>>;

// Deliver a push message to the agent as the push transport would
async fn deliver(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<Notification>, ApiError> {
    let registration = state
        .read()
        .expect("Unable to read shared state")
        .registration
        .clone();

    let message = if body.is_empty() {
        PushMessage::empty()
    } else {
        PushMessage::new(body)
    };

    let notification = registration.worker().on_push(message).settle().await?;

    Ok(Json(notification))
}

/// Create the push router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", axum::routing::post(deliver))
}
