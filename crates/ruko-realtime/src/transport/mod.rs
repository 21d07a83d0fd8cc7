//! Transport abstraction for the push channel.
//!
//! The connection driver is written against these traits so the state
//! machine can be exercised in tests with an in-process transport; the
//! production implementation in [`ws`] speaks WebSocket.

pub mod ws;

use async_trait::async_trait;
use thiserror::Error;

pub use ws::{WsConnector, WsTransport};

/// A transport-level failure.
#[derive(Debug, Error)]
pub enum TransportError {
    /// WebSocket protocol or I/O error.
    #[error("websocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),
    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// One established, bidirectional text channel.
#[async_trait]
pub trait Transport: Send {
    /// Transmit one text frame.
    async fn send(&mut self, text: String) -> Result<(), TransportError>;

    /// Receive the next text frame. `None` means the peer closed the
    /// channel; an `Err` item reports a fault on a channel that has not yet
    /// closed.
    async fn recv(&mut self) -> Option<Result<String, TransportError>>;

    /// Close the channel. Teardown failures are not reported; the channel
    /// is gone either way.
    async fn close(&mut self);
}

/// Opens transports to an endpoint.
#[async_trait]
pub trait Connector: Send + Sync + 'static {
    /// The transport this connector produces.
    type Transport: Transport + 'static;

    /// Open a new transport to `endpoint`.
    async fn connect(&self, endpoint: &str) -> Result<Self::Transport, TransportError>;
}
