//! Inbound and outbound push channel message type definitions.

use serde::{Deserialize, Serialize};

use ruko_core::types::ride::Ride;

/// Messages sent by the client to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Keepalive heartbeat, serialized as `{"type":"ping"}`.
    Ping,
    /// Arbitrary caller-supplied payload, serialized verbatim.
    #[serde(untagged)]
    Custom(serde_json::Value),
}

/// Messages pushed by the server to the client.
///
/// The backend emits one envelope per ride-lifecycle transition; anything
/// this client does not recognize is preserved raw in
/// [`Unknown`](Self::Unknown) rather than discarded.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PushMessage {
    /// A ride this channel follows changed.
    RideUpdate {
        /// Full ride snapshot after the change.
        ride: Ride,
    },
    /// Snapshot of the driver's active ride, sent right after the driver
    /// channel opens.
    CurrentRide {
        /// The active ride.
        ride: Ride,
    },
    /// A new ride is available for this driver to accept.
    NewRideRequest {
        /// The requested ride.
        ride: Ride,
    },
    /// Payload that did not decode; carries the raw text verbatim.
    #[serde(skip)]
    Unknown(String),
}

impl PushMessage {
    /// Decode an inbound payload. Never fails: payloads that do not parse as
    /// a known envelope are forwarded unchanged as [`Self::Unknown`] so the
    /// caller can apply its own fallback handling.
    pub fn decode(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(message) => message,
            Err(err) => {
                tracing::debug!(error = %err, "Unrecognized push payload, forwarding raw");
                Self::Unknown(raw.to_string())
            }
        }
    }
}
