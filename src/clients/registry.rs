use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use tokio::sync::RwLock;
use url::Url;

use super::{ClientQuery, Clients, WindowClient, WindowId};

/// Windows known to the local host, in the order they were opened
#[derive(Debug)]
pub struct WindowRegistry {
    origin: Url,
    can_open: bool,
    next_id: AtomicU64,
    windows: RwLock<Vec<WindowClient>>,
}

impl WindowRegistry {
    pub fn new(origin: Url) -> Self {
        Self {
            origin,
            can_open: true,
            next_id: AtomicU64::new(1),
            windows: RwLock::new(Vec::new()),
        }
    }

    /// A host that cannot create windows programmatically
    pub fn without_open_window(origin: Url) -> Self {
        Self {
            can_open: false,
            ..Self::new(origin)
        }
    }

    /// Record a window opened outside the agent, e.g. by the user
    pub async fn register(&self, url: &str, controlled: bool) -> Result<WindowClient> {
        let url = self.resolve(url)?;
        let window = WindowClient {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            url,
            focused: false,
            controlled,
        };
        self.windows.write().await.push(window.clone());
        Ok(window)
    }

    pub async fn close(&self, id: WindowId) -> bool {
        let mut windows = self.windows.write().await;
        let before = windows.len();
        windows.retain(|w| w.id != id);
        windows.len() != before
    }

    fn resolve(&self, url: &str) -> Result<String> {
        Ok(self
            .origin
            .join(url)
            .with_context(|| format!("Invalid window URL {}", url))?
            .to_string())
    }
}

#[async_trait]
impl Clients for WindowRegistry {
    async fn match_all(&self, query: ClientQuery) -> Result<Vec<WindowClient>> {
        let windows = self.windows.read().await;
        Ok(windows
            .iter()
            .filter(|w| query.include_uncontrolled || w.controlled)
            .cloned()
            .collect())
    }

    async fn focus(&self, id: WindowId) -> Result<WindowClient> {
        let mut windows = self.windows.write().await;
        // An unknown id must leave the current focus untouched
        if !windows.iter().any(|w| w.id == id) {
            return Err(anyhow!("No open window with id {}", id));
        }
        let mut focused = None;
        for window in windows.iter_mut() {
            window.focused = window.id == id;
            if window.focused {
                focused = Some(window.clone());
            }
        }
        focused.ok_or_else(|| anyhow!("No open window with id {}", id))
    }

    fn can_open_window(&self) -> bool {
        self.can_open
    }

    async fn open_window(&self, url: &str) -> Result<Option<WindowClient>> {
        if !self.can_open {
            return Err(anyhow!("Opening windows is not supported"));
        }
        let window = WindowClient {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            url: self.resolve(url)?,
            focused: true,
            controlled: true,
        };
        let mut windows = self.windows.write().await;
        for other in windows.iter_mut() {
            other.focused = false;
        }
        windows.push(window.clone());
        Ok(Some(window))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> WindowRegistry {
        WindowRegistry::new(Url::parse("http://localhost:8080").unwrap())
    }

    #[tokio::test]
    async fn it_filters_uncontrolled_windows_unless_asked() {
        let windows = registry();
        windows.register("/a", true).await.unwrap();
        windows.register("/b", false).await.unwrap();

        let controlled = windows.match_all(ClientQuery::default()).await.unwrap();
        assert_eq!(controlled.len(), 1);

        let all = windows
            .match_all(ClientQuery {
                include_uncontrolled: true,
            })
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].url, "http://localhost:8080/b");
    }

    #[tokio::test]
    async fn it_focuses_a_single_window() {
        let windows = registry();
        let a = windows.register("/a", true).await.unwrap();
        let b = windows.register("/b", true).await.unwrap();

        windows.focus(a.id).await.unwrap();
        let focused = windows.focus(b.id).await.unwrap();
        assert!(focused.focused);

        let all = windows.match_all(ClientQuery::default()).await.unwrap();
        assert!(!all[0].focused);
        assert!(all[1].focused);
    }

    #[tokio::test]
    async fn it_fails_to_focus_an_unknown_window() {
        assert!(registry().focus(42).await.is_err());
    }

    #[tokio::test]
    async fn it_opens_windows_relative_to_the_origin() {
        let windows = registry();
        let opened = windows.open_window("/page").await.unwrap().unwrap();
        assert_eq!(opened.url, "http://localhost:8080/page");
        assert!(opened.focused);
    }

    #[tokio::test]
    async fn it_refuses_to_open_windows_when_unsupported() {
        let windows =
            WindowRegistry::without_open_window(Url::parse("http://localhost:8080").unwrap());
        assert!(!windows.can_open_window());
        assert!(windows.open_window("/page").await.is_err());
    }
}
