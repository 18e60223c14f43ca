//! In-process host runtime: every capability the agent needs, kept in
//! memory except for the network.

use std::sync::Arc;

use anyhow::Result;

use crate::cache::MemoryCacheStorage;
use crate::clients::WindowRegistry;
use crate::core::AppConfig;
use crate::fetch::{HttpNetwork, Network};
use crate::notify::NotificationCenter;
use crate::worker::{Host, Registration, ServiceWorker};

pub struct LocalHost {
    pub caches: Arc<MemoryCacheStorage>,
    pub network: Arc<dyn Network>,
    pub notifications: Arc<NotificationCenter>,
    pub windows: Arc<WindowRegistry>,
}

impl LocalHost {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::with_network(config, Arc::new(HttpNetwork::new()))
    }

    pub fn with_network(config: &AppConfig, network: Arc<dyn Network>) -> Result<Self> {
        Ok(Self::with_parts(
            network,
            NotificationCenter::new(),
            WindowRegistry::new(config.origin_url()?),
        ))
    }

    /// Build a host around an existing tray and window registry, e.g. one
    /// with notifications denied or without window opening.
    pub fn with_parts(
        network: Arc<dyn Network>,
        notifications: NotificationCenter,
        windows: WindowRegistry,
    ) -> Self {
        Self {
            caches: Arc::new(MemoryCacheStorage::new()),
            network,
            notifications: Arc::new(notifications),
            windows: Arc::new(windows),
        }
    }

    pub fn handles(&self) -> Host {
        Host {
            caches: self.caches.clone(),
            network: self.network.clone(),
            notifications: self.notifications.clone(),
            clients: self.windows.clone(),
        }
    }

    /// Register the configured agent with this host. The agent starts out
    /// parsed; install and activate it through the returned registration.
    pub fn register(&self, config: &AppConfig) -> Result<Registration> {
        let worker = ServiceWorker::from_config(config, self.handles())?;
        Ok(Registration::new(Arc::new(worker)))
    }
}
