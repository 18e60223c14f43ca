//! The background agent: one handler per host event.
//!
//! Handlers share no mutable state. Each one that starts asynchronous work
//! hands it back as a [`WaitUntil`] so the host keeps the event alive
//! until the work finishes.
pub mod lifecycle;
pub mod wait_until;

pub use lifecycle::{Registration, WorkerState};
pub use wait_until::WaitUntil;

use std::sync::Arc;

use anyhow::Result;
use url::Url;

use crate::cache::{self, CacheStorage};
use crate::clients::Clients;
use crate::core::AppConfig;
use crate::fetch::{self, Network, Request, Response};
use crate::notify::{
    self, ClickOutcome, Notification, NotificationDefaults, NotificationHost, PushMessage,
};

/// Capabilities the host provides to the agent
#[derive(Clone)]
pub struct Host {
    pub caches: Arc<dyn CacheStorage>,
    pub network: Arc<dyn Network>,
    pub notifications: Arc<dyn NotificationHost>,
    pub clients: Arc<dyn Clients>,
}

pub struct ServiceWorker {
    cache_name: String,
    assets: Vec<Url>,
    defaults: NotificationDefaults,
    host: Host,
}

impl ServiceWorker {
    pub fn new(cache_name: &str, assets: Vec<Url>, host: Host) -> Self {
        Self {
            cache_name: cache_name.to_string(),
            assets,
            defaults: NotificationDefaults::default(),
            host,
        }
    }

    pub fn from_config(config: &AppConfig, host: Host) -> Result<Self> {
        let assets = cache::resolve_assets(&config.origin_url()?, &config.assets)?;
        Ok(Self::new(&config.cache_name, assets, host))
    }

    pub fn cache_name(&self) -> &str {
        &self.cache_name
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Populate the current cache generation. Resolves to the number of
    /// cached assets and fails if any asset could not be cached.
    pub fn on_install(self: &Arc<Self>) -> WaitUntil<usize> {
        let worker = Arc::clone(self);
        WaitUntil::spawn(async move {
            let count = cache::precache(
                worker.host.caches.as_ref(),
                worker.host.network.as_ref(),
                &worker.cache_name,
                &worker.assets,
            )
            .await?;
            tracing::info!("Cached {} assets in {}", count, worker.cache_name);
            Ok(count)
        })
    }

    /// Drop every cache generation but the current one. Resolves to the
    /// deleted generation names.
    pub fn on_activate(self: &Arc<Self>) -> WaitUntil<Vec<String>> {
        let worker = Arc::clone(self);
        WaitUntil::spawn(async move {
            let deleted =
                cache::prune_stale(worker.host.caches.as_ref(), &worker.cache_name).await?;
            for name in &deleted {
                tracing::info!("Deleted stale cache {}", name);
            }
            Ok(deleted)
        })
    }

    /// Answer an intercepted request. `None` means no response could be
    /// produced and the requester sees a failed load.
    pub async fn on_fetch(&self, request: &Request) -> Option<Response> {
        fetch::intercept(
            self.host.caches.as_ref(),
            &self.cache_name,
            self.host.network.as_ref(),
            request,
        )
        .await
    }

    pub fn on_push(self: &Arc<Self>, message: PushMessage) -> WaitUntil<Notification> {
        let worker = Arc::clone(self);
        WaitUntil::spawn(async move {
            notify::show_push(
                worker.host.notifications.as_ref(),
                &worker.defaults,
                &message,
            )
            .await
        })
    }

    pub fn on_notification_click(
        self: &Arc<Self>,
        notification: Notification,
    ) -> WaitUntil<ClickOutcome> {
        let worker = Arc::clone(self);
        WaitUntil::spawn(async move {
            notify::route_click(
                worker.host.notifications.as_ref(),
                worker.host.clients.as_ref(),
                &notification,
            )
            .await
        })
    }
}
