//! Test utilities for integration tests
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use axum::{Router, body::Body};

use sync_agent::api::{AppState, app};
use sync_agent::clients::WindowRegistry;
use sync_agent::core::AppConfig;
use sync_agent::fetch::{Network, Request, Response};
use sync_agent::host::LocalHost;
use sync_agent::notify::NotificationCenter;

pub const ORIGIN: &str = "http://app.test";

/// Origin serving a fixed set of bodies. Can be switched offline.
#[derive(Default)]
pub struct StaticNetwork {
    bodies: HashMap<String, String>,
    offline: AtomicBool,
    calls: AtomicUsize,
}

impl StaticNetwork {
    pub fn serving(entries: &[(&str, &str)]) -> Self {
        Self {
            bodies: entries
                .iter()
                .map(|(url, body)| (url.to_string(), body.to_string()))
                .collect(),
            ..Self::default()
        }
    }

    /// Serves every asset of `test_config`
    pub fn with_assets() -> Self {
        Self::serving(&[
            ("http://app.test/", "<html>home</html>"),
            ("http://app.test/index.html", "<html>index</html>"),
            ("http://app.test/noti.png", "png"),
        ])
    }

    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Network for StaticNetwork {
    async fn fetch(&self, request: &Request) -> Result<Response> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.offline.load(Ordering::SeqCst) {
            return Err(anyhow!("network unreachable"));
        }
        self.bodies
            .get(request.url.as_str())
            .map(|body| Response::ok(body.clone()))
            .ok_or_else(|| anyhow!("connection refused: {}", request.url))
    }
}

pub fn test_config(origin: &str) -> AppConfig {
    AppConfig {
        origin: origin.to_string(),
        cache_name: String::from("sync-cache-v1"),
        assets: vec![
            String::from("./"),
            String::from("./index.html"),
            String::from("./noti.png"),
        ],
    }
}

/// Creates a test application router backed by `network`. The agent is
/// registered but not installed.
pub fn test_app_with(network: Arc<dyn Network>) -> Router {
    let config = test_config(ORIGIN);
    let host = LocalHost::with_network(&config, network).expect("Failed to create host");
    app_for_host(host)
}

pub fn test_app() -> Router {
    test_app_with(Arc::new(StaticNetwork::with_assets()))
}

fn app_for_host(host: LocalHost) -> Router {
    let config = test_config(ORIGIN);
    let registration = host.register(&config).expect("Failed to register agent");
    let app_state = AppState::new(registration, host, config);
    app(Arc::new(RwLock::new(app_state)))
}

/// Creates a test application router whose notification permission was
/// revoked
pub fn test_app_without_notifications() -> Router {
    let origin = test_config(ORIGIN).origin_url().expect("Invalid origin");
    app_for_host(LocalHost::with_parts(
        Arc::new(StaticNetwork::with_assets()),
        NotificationCenter::denied(),
        WindowRegistry::new(origin),
    ))
}

/// Creates a test application router whose host cannot open windows
pub fn test_app_without_open_window() -> Router {
    let origin = test_config(ORIGIN).origin_url().expect("Invalid origin");
    app_for_host(LocalHost::with_parts(
        Arc::new(StaticNetwork::with_assets()),
        NotificationCenter::new(),
        WindowRegistry::without_open_window(origin),
    ))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not utf-8")
}
