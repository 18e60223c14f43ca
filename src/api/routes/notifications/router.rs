//! Router for the notifications API

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use http::StatusCode;

use super::public::Notification;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::notify::{NotificationCenter, NotificationHost, NotificationId, NotificationState};
use crate::worker::Registration;

type SharedState = Arc<RwLock<AppState>>;

fn handles(state: &SharedState) -> (Arc<Registration>, Arc<NotificationCenter>) {
    let shared = state.read().expect("Unable to read shared state");
    (
        shared.registration.clone(),
        shared.host.notifications.clone(),
    )
}

async fn find_shown(center: &NotificationCenter, id: NotificationId) -> Option<Notification> {
    center
        .get(id)
        .await
        .filter(|n| n.state == NotificationState::Shown)
}

async fn list(State(state): State<SharedState>) -> Json<Vec<Notification>> {
    let (_, center) = handles(&state);
    Json(center.shown().await)
}

// Simulate the user clicking a shown notification
async fn click(
    State(state): State<SharedState>,
    Path(id): Path<NotificationId>,
) -> Result<Response, ApiError> {
    let (registration, center) = handles(&state);
    let Some(notification) = find_shown(&center, id).await else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let outcome = registration
        .worker()
        .on_notification_click(notification)
        .settle()
        .await?;

    Ok(Json(outcome).into_response())
}

// Simulate the user dismissing a shown notification
async fn dismiss(
    State(state): State<SharedState>,
    Path(id): Path<NotificationId>,
) -> Result<StatusCode, ApiError> {
    let (_, center) = handles(&state);
    if find_shown(&center, id).await.is_none() {
        return Ok(StatusCode::NOT_FOUND);
    }
    center.close(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create the notifications router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", axum::routing::get(list))
        .route("/{id}", axum::routing::delete(dismiss))
        .route("/{id}/click", axum::routing::post(click))
}
