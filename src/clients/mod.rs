//! Application windows as seen from the agent
pub mod registry;

pub use registry::WindowRegistry;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub type WindowId = u64;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WindowClient {
    pub id: WindowId,
    pub url: String,
    pub focused: bool,
    // Whether this agent controls the window
    pub controlled: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ClientQuery {
    pub include_uncontrolled: bool,
}

/// Window enumeration, focus and creation provided by the host
#[async_trait]
pub trait Clients: Send + Sync {
    /// Open windows in host-defined order
    async fn match_all(&self, query: ClientQuery) -> Result<Vec<WindowClient>>;

    async fn focus(&self, id: WindowId) -> Result<WindowClient>;

    /// Whether the host can create windows programmatically
    fn can_open_window(&self) -> bool;

    /// Resolves to `None` when the host opened the window but does not
    /// expose it to the agent.
    async fn open_window(&self, url: &str) -> Result<Option<WindowClient>>;
}
