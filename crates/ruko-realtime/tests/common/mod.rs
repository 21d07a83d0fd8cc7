//! A deterministic in-process stand-in for the WebSocket transport.
//!
//! Tests script connection outcomes up front, then drive the channel by
//! feeding frames in and dropping the peer side, without opening sockets.
//! Combined with `start_paused` tokio time, this makes the reconnect and
//! keepalive schedules fully observable.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::time::Instant;

use ruko_core::config::realtime::RealtimeConfig;
use ruko_realtime::ChannelEvent;
use ruko_realtime::transport::{Connector, Transport, TransportError};

/// Scripted outcome for one connection attempt.
#[derive(Debug, Clone, Copy)]
pub enum ConnectOutcome {
    Accept,
    Refuse,
}

/// Peer (server) side of one accepted connection.
pub struct Peer {
    /// Frames pushed here appear as inbound text on the channel.
    pub to_client: mpsc::UnboundedSender<Result<String, TransportError>>,
    /// Everything the channel transmitted, in order.
    pub from_client: mpsc::UnboundedReceiver<String>,
}

impl Peer {
    /// Simulate the server dropping the connection.
    pub fn drop_connection(self) {}
}

struct ConnectorState {
    script: VecDeque<ConnectOutcome>,
    attempts: Vec<Instant>,
}

/// Connector whose attempts follow a script; attempts past the end of the
/// script are accepted.
#[derive(Clone)]
pub struct FakeConnector {
    state: Arc<Mutex<ConnectorState>>,
    peer_tx: mpsc::UnboundedSender<Peer>,
}

impl FakeConnector {
    /// Returns the connector plus a stream of peer handles, one per
    /// accepted connection.
    pub fn new(script: Vec<ConnectOutcome>) -> (Self, mpsc::UnboundedReceiver<Peer>) {
        let (peer_tx, peer_rx) = mpsc::unbounded_channel();
        let connector = Self {
            state: Arc::new(Mutex::new(ConnectorState {
                script: script.into(),
                attempts: Vec::new(),
            })),
            peer_tx,
        };
        (connector, peer_rx)
    }

    /// Instants at which the channel attempted to connect.
    pub fn attempts(&self) -> Vec<Instant> {
        self.state.lock().unwrap().attempts.clone()
    }

    /// Number of connection attempts so far.
    pub fn attempt_count(&self) -> usize {
        self.state.lock().unwrap().attempts.len()
    }
}

pub struct FakeTransport {
    incoming: mpsc::UnboundedReceiver<Result<String, TransportError>>,
    outgoing: mpsc::UnboundedSender<String>,
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&mut self, text: String) -> Result<(), TransportError> {
        self.outgoing
            .send(text)
            .map_err(|_| TransportError::Other("peer gone".to_string()))
    }

    async fn recv(&mut self) -> Option<Result<String, TransportError>> {
        self.incoming.recv().await
    }

    async fn close(&mut self) {}
}

#[async_trait]
impl Connector for FakeConnector {
    type Transport = FakeTransport;

    async fn connect(&self, _endpoint: &str) -> Result<FakeTransport, TransportError> {
        let outcome = {
            let mut state = self.state.lock().unwrap();
            state.attempts.push(Instant::now());
            state.script.pop_front()
        };

        match outcome {
            Some(ConnectOutcome::Refuse) => {
                Err(TransportError::Other("connection refused".to_string()))
            }
            Some(ConnectOutcome::Accept) | None => {
                let (to_client_tx, to_client_rx) = mpsc::unbounded_channel();
                let (outgoing_tx, outgoing_rx) = mpsc::unbounded_channel();
                let _ = self.peer_tx.send(Peer {
                    to_client: to_client_tx,
                    from_client: outgoing_rx,
                });
                Ok(FakeTransport {
                    incoming: to_client_rx,
                    outgoing: outgoing_tx,
                })
            }
        }
    }
}

/// Config with the keepalive default but test-friendly reconnect settings.
pub fn test_config(max_reconnect_attempts: u32, reconnect_interval_ms: u64) -> RealtimeConfig {
    RealtimeConfig {
        max_reconnect_attempts,
        reconnect_interval_ms,
        ping_interval_ms: 30000,
    }
}

/// Wait for the next channel event; panics instead of hanging.
pub async fn next_event(events: &mut mpsc::UnboundedReceiver<ChannelEvent>) -> ChannelEvent {
    tokio::time::timeout(Duration::from_secs(600), events.recv())
        .await
        .expect("timed out waiting for channel event")
        .expect("event stream ended unexpectedly")
}

/// Assert that nothing is emitted within the window.
pub async fn assert_no_event(
    events: &mut mpsc::UnboundedReceiver<ChannelEvent>,
    window: Duration,
) {
    match tokio::time::timeout(window, events.recv()).await {
        Err(_) => {}
        Ok(None) => {}
        Ok(Some(event)) => panic!("unexpected event within window: {event:?}"),
    }
}

/// Wait for the next accepted connection's peer handle.
pub async fn next_peer(peers: &mut mpsc::UnboundedReceiver<Peer>) -> Peer {
    tokio::time::timeout(Duration::from_secs(600), peers.recv())
        .await
        .expect("timed out waiting for connection")
        .expect("connector dropped")
}

/// Wait for the next frame the channel transmitted.
pub async fn next_outgoing(peer: &mut Peer) -> String {
    tokio::time::timeout(Duration::from_secs(600), peer.from_client.recv())
        .await
        .expect("timed out waiting for outbound frame")
        .expect("transport side dropped")
}

/// A ride_update envelope as the backend would push it.
pub const RIDE_UPDATE_JSON: &str = r#"{
    "type": "ride_update",
    "ride": {
        "id": 8,
        "passenger": {
            "id": 1,
            "user": {
                "id": 2,
                "username": "ana",
                "email": "ana@example.com",
                "is_driver": false,
                "is_passenger": true
            },
            "phone_number": "+351911000111"
        },
        "driver": null,
        "pickup_location": "Praca do Comercio",
        "pickup_lat": null,
        "pickup_lng": null,
        "dropoff_location": "Belem",
        "dropoff_lat": null,
        "dropoff_lng": null,
        "status": "REQUESTED",
        "requested_at": "2024-05-12T10:31:00Z",
        "completed_at": null,
        "fare": null
    }
}"#;
