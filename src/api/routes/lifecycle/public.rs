//! Public types for the lifecycle API
use serde::{Deserialize, Serialize};

use crate::worker::WorkerState;

#[derive(Serialize, Deserialize, Debug)]
pub struct LifecycleResponse {
    pub state: WorkerState,
    pub cache_name: String,
    // Every cache generation present in storage
    pub generations: Vec<String>,
    // Entries of the current generation
    pub cached: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct InstallResponse {
    pub cached: usize,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ActivateResponse {
    pub deleted: Vec<String>,
}
