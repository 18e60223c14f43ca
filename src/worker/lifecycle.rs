//! Registration lifecycle of the agent as driven by the host

use std::sync::Arc;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use super::ServiceWorker;
use crate::fetch::{Network, Request, Response};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerState {
    Parsed,
    Installing,
    Installed,
    Activating,
    Activated,
    /// Installation failed; the host leaves the agent inactive
    Redundant,
}

impl WorkerState {
    pub fn can_intercept_fetch(&self) -> bool {
        matches!(self, WorkerState::Activated)
    }
}

impl std::fmt::Display for WorkerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WorkerState::Parsed => "parsed",
            WorkerState::Installing => "installing",
            WorkerState::Installed => "installed",
            WorkerState::Activating => "activating",
            WorkerState::Activated => "activated",
            WorkerState::Redundant => "redundant",
        };
        write!(f, "{}", name)
    }
}

/// Drives one agent through install and activation and decides whether
/// requests go through it.
pub struct Registration {
    worker: Arc<ServiceWorker>,
    state: RwLock<WorkerState>,
}

impl Registration {
    pub fn new(worker: Arc<ServiceWorker>) -> Self {
        Self {
            worker,
            state: RwLock::new(WorkerState::Parsed),
        }
    }

    pub fn worker(&self) -> &Arc<ServiceWorker> {
        &self.worker
    }

    pub async fn state(&self) -> WorkerState {
        *self.state.read().await
    }

    async fn set_state(&self, next: WorkerState) {
        let mut state = self.state.write().await;
        if *state != next {
            tracing::debug!("Agent state {} -> {}", *state, next);
            *state = next;
        }
    }

    /// Run the install handler. A failure makes the agent redundant.
    pub async fn install(&self) -> Result<usize> {
        self.set_state(WorkerState::Installing).await;
        match self.worker.on_install().settle().await {
            Ok(count) => {
                self.set_state(WorkerState::Installed).await;
                Ok(count)
            }
            Err(e) => {
                tracing::error!("Install failed: {:#}", e);
                self.set_state(WorkerState::Redundant).await;
                Err(e)
            }
        }
    }

    /// Run the activate handler. Only an installed (or already active)
    /// agent can activate. The agent becomes active even if pruning
    /// stale generations fails.
    pub async fn activate(&self) -> Result<Vec<String>> {
        let current = self.state().await;
        if !matches!(current, WorkerState::Installed | WorkerState::Activated) {
            return Err(anyhow!("Cannot activate an agent in state {}", current));
        }

        self.set_state(WorkerState::Activating).await;
        let result = self.worker.on_activate().settle().await;
        self.set_state(WorkerState::Activated).await;
        result
    }

    /// Route a request through the agent once it is active. Before that
    /// the request goes straight to the network.
    pub async fn fetch(&self, request: &Request) -> Option<Response> {
        if self.state().await.can_intercept_fetch() {
            return self.worker.on_fetch(request).await;
        }

        match self.worker.host().network.fetch(request).await {
            Ok(resp) => Some(resp),
            Err(e) => {
                tracing::debug!("Network fetch failed for {}: {:#}", request.url, e);
                None
            }
        }
    }
}
