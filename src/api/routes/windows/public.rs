//! Public types for the windows API
use serde::Deserialize;

pub use crate::clients::WindowClient;

#[derive(Deserialize)]
pub struct OpenWindowRequest {
    pub url: String,
    // Windows opened by the user are not controlled by the agent unless
    // stated otherwise
    #[serde(default)]
    pub controlled: bool,
}
