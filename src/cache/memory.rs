//! In-memory cache storage used by the local host

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Cache, CacheStorage};
use crate::fetch::{Request, Response};

#[derive(Debug, Default)]
pub struct MemoryCache {
    // Insertion ordered, keyed by request identity
    entries: RwLock<Vec<(String, Response)>>,
}

#[async_trait]
impl Cache for MemoryCache {
    async fn match_request(&self, request: &Request) -> Result<Option<Response>> {
        let Some(key) = request.cache_key() else {
            return Ok(None);
        };
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, resp)| resp.clone()))
    }

    async fn put_all(&self, batch: Vec<(Request, Response)>) -> Result<()> {
        // A single write guard makes the batch visible all at once
        let mut entries = self.entries.write().await;
        for (request, response) in batch {
            let Some(key) = request.cache_key() else {
                continue;
            };
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = response,
                None => entries.push((key, response)),
            }
        }
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>> {
        let entries = self.entries.read().await;
        Ok(entries.iter().map(|(k, _)| k.clone()).collect())
    }
}

#[derive(Debug, Default)]
pub struct MemoryCacheStorage {
    generations: RwLock<Vec<(String, Arc<MemoryCache>)>>,
}

impl MemoryCacheStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStorage for MemoryCacheStorage {
    async fn open(&self, name: &str) -> Result<Arc<dyn Cache>> {
        let mut generations = self.generations.write().await;
        let cache = match generations.iter().find(|(n, _)| n == name) {
            Some((_, cache)) => cache.clone(),
            None => {
                let cache = Arc::new(MemoryCache::default());
                generations.push((name.to_string(), cache.clone()));
                cache
            }
        };
        let cache: Arc<dyn Cache> = cache;
        Ok(cache)
    }

    async fn has(&self, name: &str) -> Result<bool> {
        let generations = self.generations.read().await;
        Ok(generations.iter().any(|(n, _)| n == name))
    }

    async fn keys(&self) -> Result<Vec<String>> {
        let generations = self.generations.read().await;
        Ok(generations.iter().map(|(n, _)| n.clone()).collect())
    }

    async fn delete(&self, name: &str) -> Result<bool> {
        let mut generations = self.generations.write().await;
        let before = generations.len();
        generations.retain(|(n, _)| n != name);
        Ok(generations.len() != before)
    }
}
