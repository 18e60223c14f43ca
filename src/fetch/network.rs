use anyhow::{Context, Result};
use async_trait::async_trait;

use super::{Network, Request, Response};

/// Network layer backed by a shared `reqwest` client
#[derive(Clone, Debug, Default)]
pub struct HttpNetwork {
    client: reqwest::Client,
}

impl HttpNetwork {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Network for HttpNetwork {
    async fn fetch(&self, request: &Request) -> Result<Response> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone());
        if !request.body.is_empty() {
            builder = builder.body(request.body.clone());
        }

        let resp = builder
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", request.url))?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp
            .bytes()
            .await
            .with_context(|| format!("Failed to read body of {}", request.url))?;

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;
    use url::Url;

    #[tokio::test]
    async fn it_fetches_a_resource() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/index.html")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<h1>hi</h1>")
            .create_async()
            .await;

        let url = Url::parse(&format!("{}/index.html", server.url())).unwrap();
        let resp = HttpNetwork::new().fetch(&Request::get(url)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.headers.get("content-type").unwrap(), "text/html");
        assert_eq!(&resp.body[..], b"<h1>hi</h1>");
    }

    #[tokio::test]
    async fn it_returns_error_statuses_as_responses() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/missing.png")
            .with_status(404)
            .create_async()
            .await;

        let url = Url::parse(&format!("{}/missing.png", server.url())).unwrap();
        let resp = HttpNetwork::new().fetch(&Request::get(url)).await.unwrap();

        assert_eq!(resp.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_fails_when_the_host_is_unreachable() {
        // Port 9 (discard) is not expected to be listening locally
        let url = Url::parse("http://127.0.0.1:9/index.html").unwrap();
        let result = HttpNetwork::new().fetch(&Request::get(url)).await;
        assert!(result.is_err());
    }
}
