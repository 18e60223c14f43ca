//! Router for the windows API

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::{Path, State},
};
use http::StatusCode;

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::clients::{ClientQuery, Clients, WindowId, WindowRegistry};

type SharedState = Arc<RwLock<AppState>>;

fn registry(state: &SharedState) -> Arc<WindowRegistry> {
    state
        .read()
        .expect("Unable to read shared state")
        .host
        .windows
        .clone()
}

async fn list(
    State(state): State<SharedState>,
) -> Result<Json<Vec<public::WindowClient>>, ApiError> {
    let windows = registry(&state)
        .match_all(ClientQuery {
            include_uncontrolled: true,
        })
        .await?;
    Ok(Json(windows))
}

// Record a window the user opened
async fn open(
    State(state): State<SharedState>,
    Json(request): Json<public::OpenWindowRequest>,
) -> Result<Json<public::WindowClient>, ApiError> {
    let window = registry(&state)
        .register(&request.url, request.controlled)
        .await?;
    Ok(Json(window))
}

async fn close(State(state): State<SharedState>, Path(id): Path<WindowId>) -> StatusCode {
    if registry(&state).close(id).await {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

/// Create the windows router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", axum::routing::get(list).post(open))
        .route("/{id}", axum::routing::delete(close))
}
