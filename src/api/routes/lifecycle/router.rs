//! Router for the lifecycle API

use std::sync::{Arc, RwLock};

use axum::{Json, Router, extract::State};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::cache::{Cache, CacheStorage};
use crate::worker::Registration;

type SharedState = Arc<RwLock<AppState>>;

fn registration(state: &SharedState) -> Arc<Registration> {
    state
        .read()
        .expect("Unable to read shared state")
        .registration
        .clone()
}

async fn status(
    State(state): State<SharedState>,
) -> Result<Json<public::LifecycleResponse>, ApiError> {
    let (registration, caches) = {
        let shared = state.read().expect("Unable to read shared state");
        (shared.registration.clone(), shared.host.caches.clone())
    };

    let cache_name = registration.worker().cache_name().to_string();
    let generations = caches.keys().await?;
    let cached = if caches.has(&cache_name).await? {
        caches.open(&cache_name).await?.keys().await?
    } else {
        Vec::new()
    };

    Ok(Json(public::LifecycleResponse {
        state: registration.state().await,
        cache_name,
        generations,
        cached,
    }))
}

async fn install(
    State(state): State<SharedState>,
) -> Result<Json<public::InstallResponse>, ApiError> {
    let cached = registration(&state).install().await?;
    Ok(Json(public::InstallResponse { cached }))
}

async fn activate(
    State(state): State<SharedState>,
) -> Result<Json<public::ActivateResponse>, ApiError> {
    let deleted = registration(&state).activate().await?;
    Ok(Json(public::ActivateResponse { deleted }))
}

/// Create the lifecycle router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", axum::routing::get(status))
        .route("/install", axum::routing::post(install))
        .route("/activate", axum::routing::post(activate))
}
