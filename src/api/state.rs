use std::sync::Arc;

use crate::core::AppConfig;
use crate::host::LocalHost;
use crate::worker::Registration;

pub struct AppState {
    pub registration: Arc<Registration>,
    pub host: Arc<LocalHost>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(registration: Registration, host: LocalHost, config: AppConfig) -> Self {
        Self {
            registration: Arc::new(registration),
            host: Arc::new(host),
            config,
        }
    }
}
