use std::env;

use anyhow::{Context, Result};
use url::Url;

/// Bumping the version is the only way to invalidate previously cached
/// assets.
pub const CACHE_NAME: &str = "sync-cache-v1";

pub const ASSETS: &[&str] = &[
    "./",
    "./index.html",
    "./manifest.json",
    "./icon-192.png",
    "./icon-512.png",
    "./apple-touch-icon.png",
    "./favicon-32x32.png",
    "./noti.png",
    "https://fonts.googleapis.com/css2?family=Poppins:wght@400;500;600;700&display=swap",
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css",
    "https://cdn.jsdelivr.net/npm/chart.js",
    "https://cdn.jsdelivr.net/npm/chartjs-adapter-date-fns/dist/chartjs-adapter-date-fns.bundle.min.js",
];

#[derive(Clone, Debug)]
pub struct AppConfig {
    // Application origin relative assets and windows resolve against
    pub origin: String,
    pub cache_name: String,
    pub assets: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let origin =
            env::var("SYNC_AGENT_ORIGIN").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
        let cache_name =
            env::var("SYNC_AGENT_CACHE_NAME").unwrap_or_else(|_| CACHE_NAME.to_string());

        Self {
            origin,
            cache_name,
            assets: ASSETS.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl AppConfig {
    pub fn origin_url(&self) -> Result<Url> {
        Url::parse(&self.origin).with_context(|| format!("Invalid origin {}", self.origin))
    }
}
