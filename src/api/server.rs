use std::sync::{Arc, RwLock};

use anyhow::Result;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::{proxy, routes};
use crate::api::state::AppState;
use crate::core::AppConfig;
use crate::host::LocalHost;

pub fn app(shared_state: Arc<RwLock<AppState>>) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        // API routes
        .nest("/api", routes::router())
        // Everything else goes through the agent
        .fallback(proxy::intercept)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::clone(&shared_state))
}

// Run the server
pub async fn serve(host: String, port: String, config: AppConfig) -> Result<()> {
    let local_host = LocalHost::new(&config)?;
    let registration = local_host.register(&config)?;

    // Install and activate right away the way a browser does after
    // registration. A failed install leaves the agent inactive and
    // requests go straight to the origin.
    match registration.install().await {
        Ok(_) => {
            if let Err(e) = registration.activate().await {
                tracing::error!("Activation failed: {:#}", e);
            }
        }
        Err(_) => {
            tracing::warn!(
                "Agent inactive, requests go straight to {}",
                config.origin
            );
        }
    }

    let app_state = AppState::new(registration, local_host, config);
    let shared_state = Arc::new(RwLock::new(app_state));
    let app = app(Arc::clone(&shared_state));

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;

    tracing::debug!("Server started. Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
