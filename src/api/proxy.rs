//! Offline proxy: every request outside `/api` is answered by the agent.

use std::sync::{Arc, RwLock};

use axum::{
    body::to_bytes,
    extract::{Request, State},
    response::{IntoResponse, Response},
};
use anyhow::Context;
use http::{StatusCode, Uri, header};
use url::Url;

use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::fetch;

type SharedState = Arc<RwLock<AppState>>;

/// Absolute-form requests (`GET https://cdn.example/lib.js`) name their
/// target, which lets cross-origin assets be served from the cache.
/// Origin-form requests are mapped onto the application origin by path
/// and query only.
fn target_url(uri: &Uri, mut origin: Url) -> anyhow::Result<Url> {
    if uri.scheme().is_some() && uri.authority().is_some() {
        return Url::parse(&uri.to_string())
            .with_context(|| format!("Invalid request target {}", uri));
    }

    origin.set_path(uri.path());
    origin.set_query(uri.query());
    Ok(origin)
}

pub async fn intercept(
    State(state): State<SharedState>,
    request: Request,
) -> Result<Response, ApiError> {
    let (registration, origin) = {
        let shared = state.read().expect("Unable to read shared state");
        (shared.registration.clone(), shared.config.origin_url())
    };

    let url = target_url(request.uri(), origin?)?;

    let (parts, body) = request.into_parts();
    let body = to_bytes(body, usize::MAX).await?;
    let mut headers = parts.headers;
    headers.remove(header::HOST);
    headers.remove(header::CONTENT_LENGTH);

    let request = fetch::Request {
        method: parts.method,
        url,
        headers,
        body,
    };

    let resp = match registration.fetch(&request).await {
        Some(resp) => resp,
        None => return Ok(StatusCode::GATEWAY_TIMEOUT.into_response()),
    };

    let mut headers = resp.headers;
    for name in [
        header::CONNECTION,
        header::CONTENT_LENGTH,
        header::TRANSFER_ENCODING,
    ] {
        headers.remove(name);
    }

    Ok((resp.status, headers, resp.body).into_response())
}
