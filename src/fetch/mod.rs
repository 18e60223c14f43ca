//! Requests, responses and the network layer the agent falls back to
pub mod interceptor;
pub mod network;

pub use interceptor::intercept;
pub use network::HttpNetwork;

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use url::Url;

#[derive(Clone, Debug)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Request {
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// Identity used to match the request against cache entries.
    ///
    /// Only `GET` requests have one. The fragment never takes part in
    /// matching.
    pub fn cache_key(&self) -> Option<String> {
        if self.method != Method::GET {
            return None;
        }
        let mut url = self.url.clone();
        url.set_fragment(None);
        Some(url.to_string())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self::new(StatusCode::OK, body)
    }
}

/// Live network access provided by the host.
///
/// Transport failures (no connectivity, DNS, refused connections) are
/// errors. An HTTP error status is still a response.
#[async_trait]
pub trait Network: Send + Sync {
    async fn fetch(&self, request: &Request) -> Result<Response>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_ignores_the_fragment_in_cache_keys() {
        let req = Request::get(Url::parse("http://localhost/index.html#top").unwrap());
        assert_eq!(
            req.cache_key().as_deref(),
            Some("http://localhost/index.html")
        );
    }

    #[test]
    fn it_has_no_cache_key_for_non_get_requests() {
        let mut req = Request::get(Url::parse("http://localhost/api").unwrap());
        req.method = Method::POST;
        assert!(req.cache_key().is_none());
    }
}
