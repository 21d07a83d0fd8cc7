//! Real-time push channel configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Real-time push channel configuration.
///
/// One instance is handed to every channel client at construction; there is
/// no process-wide configuration singleton.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Consecutive failed opens tolerated before the channel gives up.
    #[serde(default = "default_max_reconnect_attempts")]
    pub max_reconnect_attempts: u32,
    /// Base reconnect delay in milliseconds.
    #[serde(default = "default_reconnect_interval_ms")]
    pub reconnect_interval_ms: u64,
    /// Keepalive ping interval in milliseconds.
    #[serde(default = "default_ping_interval_ms")]
    pub ping_interval_ms: u64,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            max_reconnect_attempts: default_max_reconnect_attempts(),
            reconnect_interval_ms: default_reconnect_interval_ms(),
            ping_interval_ms: default_ping_interval_ms(),
        }
    }
}

impl RealtimeConfig {
    /// Base reconnect delay as a [`Duration`].
    pub fn reconnect_interval(&self) -> Duration {
        Duration::from_millis(self.reconnect_interval_ms)
    }

    /// Keepalive ping interval as a [`Duration`].
    pub fn ping_interval(&self) -> Duration {
        Duration::from_millis(self.ping_interval_ms)
    }
}

fn default_max_reconnect_attempts() -> u32 {
    10
}

fn default_reconnect_interval_ms() -> u64 {
    5000
}

fn default_ping_interval_ms() -> u64 {
    30000
}
