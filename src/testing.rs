//! Host doubles shared by the unit tests

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, anyhow};
use async_trait::async_trait;

use crate::clients::{ClientQuery, Clients, WindowClient, WindowId};
use crate::fetch::{Network, Request, Response};
use crate::notify::{
    Notification, NotificationHost, NotificationId, NotificationRecord, NotificationState,
};

/// Network that answers from a table and counts every call
#[derive(Default)]
pub struct MockNetwork {
    serve_all: bool,
    responses: HashMap<String, Response>,
    failing: HashSet<String>,
    calls: AtomicUsize,
}

impl MockNetwork {
    /// Every URL answers 200 with the URL as its body
    pub fn serving_all() -> Self {
        Self {
            serve_all: true,
            ..Self::default()
        }
    }

    /// Every request fails as if there were no connectivity
    pub fn offline() -> Self {
        Self::default()
    }

    pub fn failing(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }

    pub fn responding(mut self, url: &str, response: Response) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Network for MockNetwork {
    async fn fetch(&self, request: &Request) -> Result<Response> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let url = request.url.to_string();
        if self.failing.contains(&url) {
            return Err(anyhow!("connection refused: {}", url));
        }
        if let Some(resp) = self.responses.get(&url) {
            return Ok(resp.clone());
        }
        if self.serve_all {
            return Ok(Response::ok(url));
        }
        Err(anyhow!("network unreachable: {}", url))
    }
}

/// Notification host that records what it was asked to do
#[derive(Default)]
pub struct RecordingNotifications {
    refuse: bool,
    shown: Mutex<Vec<NotificationRecord>>,
    closed: Mutex<Vec<NotificationId>>,
}

impl RecordingNotifications {
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    pub fn shown(&self) -> Vec<NotificationRecord> {
        self.shown.lock().unwrap().clone()
    }

    pub fn closed(&self) -> Vec<NotificationId> {
        self.closed.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationHost for RecordingNotifications {
    async fn show_notification(&self, record: NotificationRecord) -> Result<Notification> {
        if self.refuse {
            return Err(anyhow!("Notification permission denied"));
        }
        let mut shown = self.shown.lock().unwrap();
        shown.push(record.clone());
        Ok(Notification {
            id: shown.len() as NotificationId,
            state: NotificationState::Shown,
            record,
        })
    }

    async fn close(&self, id: NotificationId) -> Result<()> {
        self.closed.lock().unwrap().push(id);
        Ok(())
    }
}

/// Fixed window list; ids are 1-based positions
pub struct ScriptedClients {
    windows: Vec<WindowClient>,
    can_open: bool,
    focused: Mutex<Vec<WindowId>>,
    opened: Mutex<Vec<String>>,
}

impl ScriptedClients {
    pub fn with_windows(urls: &[&str]) -> Self {
        let windows = urls
            .iter()
            .enumerate()
            .map(|(i, url)| WindowClient {
                id: i as WindowId + 1,
                url: url.to_string(),
                focused: false,
                controlled: false,
            })
            .collect();
        Self {
            windows,
            can_open: true,
            focused: Mutex::new(Vec::new()),
            opened: Mutex::new(Vec::new()),
        }
    }

    pub fn without_open(mut self) -> Self {
        self.can_open = false;
        self
    }

    pub fn focused(&self) -> Vec<WindowId> {
        self.focused.lock().unwrap().clone()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

#[async_trait]
impl Clients for ScriptedClients {
    async fn match_all(&self, query: ClientQuery) -> Result<Vec<WindowClient>> {
        Ok(self
            .windows
            .iter()
            .filter(|w| query.include_uncontrolled || w.controlled)
            .cloned()
            .collect())
    }

    async fn focus(&self, id: WindowId) -> Result<WindowClient> {
        self.focused.lock().unwrap().push(id);
        let mut window = self
            .windows
            .iter()
            .find(|w| w.id == id)
            .cloned()
            .ok_or_else(|| anyhow!("No window {}", id))?;
        window.focused = true;
        Ok(window)
    }

    fn can_open_window(&self) -> bool {
        self.can_open
    }

    async fn open_window(&self, url: &str) -> Result<Option<WindowClient>> {
        let mut opened = self.opened.lock().unwrap();
        opened.push(url.to_string());
        Ok(Some(WindowClient {
            id: (self.windows.len() + opened.len()) as WindowId,
            url: url.to_string(),
            focused: true,
            controlled: true,
        }))
    }
}
