//! Push channel connection states.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of one push channel.
///
/// Exactly one state holds at any time. Transitions are driven only by the
/// transport's lifecycle events or by an explicit close from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    /// No transport. Initial state, and terminal after an intentional close
    /// or an exhausted reconnect budget.
    Closed,
    /// A transport open is in flight.
    Connecting,
    /// The channel is live; sends go straight to the wire.
    Open,
    /// An intentional close is tearing the transport down.
    Closing,
}

impl ConnectionState {
    /// True iff the channel is live.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "closed"),
            Self::Connecting => write!(f, "connecting"),
            Self::Open => write!(f, "open"),
            Self::Closing => write!(f, "closing"),
        }
    }
}
