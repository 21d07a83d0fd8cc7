//! Backend API endpoint configuration.

use serde::{Deserialize, Serialize};

/// Backend API and push-channel endpoint settings.
///
/// The push channel shares its host with the REST API: the WebSocket base is
/// derived from `base_url` by swapping the URL scheme, and every channel URL
/// carries the session token as a query parameter because the backend
/// authenticates the upgrade request from the query string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend API, e.g. `https://ride.example.com`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    /// WebSocket base URL derived from [`base_url`](Self::base_url)
    /// (`http` becomes `ws`, `https` becomes `wss`).
    pub fn ws_base_url(&self) -> String {
        if let Some(rest) = self.base_url.strip_prefix("https") {
            format!("wss{rest}")
        } else if let Some(rest) = self.base_url.strip_prefix("http") {
            format!("ws{rest}")
        } else {
            self.base_url.clone()
        }
    }

    /// Push channel endpoint for a single ride.
    pub fn ride_channel(&self, ride_id: i64, token: &str) -> String {
        format!("{}/ws/ride/{ride_id}/?token={token}", self.ws_base_url())
    }

    /// Push channel endpoint for an on-duty driver.
    pub fn driver_channel(&self, driver_id: i64, token: &str) -> String {
        format!("{}/ws/driver/{driver_id}/?token={token}", self.ws_base_url())
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}
