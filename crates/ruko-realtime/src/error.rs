//! Push channel error types.

use thiserror::Error;

use crate::transport::TransportError;

/// Failures surfaced through [`ChannelEvent::Error`](crate::ChannelEvent).
///
/// None of these are returned from the client's methods; a channel is a
/// long-lived background facility and communicates every failure through its
/// event stream.
#[derive(Debug, Error)]
pub enum RealtimeError {
    /// Opening the transport failed.
    #[error("failed to open push channel: {0}")]
    Connect(#[source] TransportError),

    /// The open transport failed while sending or receiving.
    #[error("push channel transport failure: {0}")]
    Transport(#[from] TransportError),

    /// An outbound message could not be encoded and was dropped.
    #[error("failed to encode outbound message: {0}")]
    Encode(#[from] serde_json::Error),

    /// The reconnect budget is exhausted; the channel is terminal and the
    /// caller must construct a new one.
    #[error("gave up after {attempts} reconnect attempts")]
    ReconnectExhausted {
        /// Consecutive failed cycles performed before giving up.
        attempts: u32,
    },
}
