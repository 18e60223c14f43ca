use super::{Network, Request, Response};
use crate::cache::CacheStorage;

/// Cache first, then network.
///
/// A hit in the current generation is returned as is, with no network
/// round trip and no revalidation. A miss goes to the network and the
/// result is not written back. When the network fails too the failure is
/// swallowed and no response is produced.
pub async fn intercept(
    storage: &dyn CacheStorage,
    cache_name: &str,
    network: &dyn Network,
    request: &Request,
) -> Option<Response> {
    match storage.match_in(cache_name, request).await {
        Ok(Some(hit)) => {
            tracing::debug!("Serving {} from {}", request.url, cache_name);
            return Some(hit);
        }
        Ok(None) => {}
        Err(e) => {
            tracing::debug!("Cache lookup failed for {}: {:#}", request.url, e);
            return None;
        }
    }

    match network.fetch(request).await {
        Ok(resp) => Some(resp),
        Err(e) => {
            tracing::debug!("Network fallback failed for {}: {:#}", request.url, e);
            None
        }
    }
}
