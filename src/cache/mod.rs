//! Versioned asset cache: the storage seam and the install/activate
//! operations that populate and prune it.
pub mod memory;

pub use memory::{MemoryCache, MemoryCacheStorage};

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use futures::future::try_join_all;
use url::Url;

use crate::fetch::{Network, Request, Response};

/// One named cache generation
#[async_trait]
pub trait Cache: Send + Sync {
    /// Exact match by request identity
    async fn match_request(&self, request: &Request) -> Result<Option<Response>>;

    /// Store every entry or none of them
    async fn put_all(&self, entries: Vec<(Request, Response)>) -> Result<()>;

    /// Identities of the stored entries in insertion order
    async fn keys(&self) -> Result<Vec<String>>;
}

/// Host storage holding every cache generation by name
#[async_trait]
pub trait CacheStorage: Send + Sync {
    /// Open the named generation, creating it if absent
    async fn open(&self, name: &str) -> Result<Arc<dyn Cache>>;

    async fn has(&self, name: &str) -> Result<bool>;

    /// Generation names in creation order
    async fn keys(&self) -> Result<Vec<String>>;

    /// Returns false when no generation had that name
    async fn delete(&self, name: &str) -> Result<bool>;

    /// Look up a request in one generation without creating it
    async fn match_in(&self, name: &str, request: &Request) -> Result<Option<Response>> {
        if !self.has(name).await? {
            return Ok(None);
        }
        self.open(name).await?.match_request(request).await
    }
}

/// Resolve the configured asset list against the application origin.
/// Absolute entries are kept as they are.
pub fn resolve_assets(origin: &Url, assets: &[String]) -> Result<Vec<Url>> {
    assets
        .iter()
        .map(|asset| {
            origin
                .join(asset)
                .with_context(|| format!("Invalid asset URL {}", asset))
        })
        .collect()
}

/// Populate the named generation with the whole asset list.
///
/// Every asset is fetched before anything is written, so a single
/// failure leaves no entry from this attempt behind. Returns the number
/// of cached entries.
pub async fn precache(
    storage: &dyn CacheStorage,
    network: &dyn Network,
    cache_name: &str,
    assets: &[Url],
) -> Result<usize> {
    let cache = storage.open(cache_name).await?;

    let requests: Vec<Request> = assets.iter().cloned().map(Request::get).collect();
    let responses = try_join_all(requests.iter().map(|req| fetch_asset(network, req))).await?;

    let count = requests.len();
    cache
        .put_all(requests.into_iter().zip(responses).collect())
        .await?;

    Ok(count)
}

async fn fetch_asset(network: &dyn Network, request: &Request) -> Result<Response> {
    let resp = network
        .fetch(request)
        .await
        .with_context(|| format!("Failed to precache {}", request.url))?;

    if !resp.status.is_success() {
        bail!("Failed to precache {}: status {}", request.url, resp.status);
    }

    Ok(resp)
}

/// Delete every generation except the current one and return the names
/// that were removed.
pub async fn prune_stale(storage: &dyn CacheStorage, current: &str) -> Result<Vec<String>> {
    let stale: Vec<String> = storage
        .keys()
        .await?
        .into_iter()
        .filter(|name| name != current)
        .collect();

    try_join_all(stale.iter().map(|name| storage.delete(name))).await?;

    Ok(stale)
}
