//! # ruko-realtime
//!
//! Real-time push channel client for the Ruko ride-hailing apps. Provides:
//!
//! - One persistent WebSocket channel per active ride or on-duty driver
//! - Automatic reconnection with linearly growing, capped backoff
//! - In-order delivery of messages queued while disconnected
//! - Periodic keepalive pings while the channel is open
//!
//! The caller constructs a [`RealtimeClient`] from an endpoint and a
//! [`RealtimeConfig`](ruko_core::config::realtime::RealtimeConfig), polls the
//! returned event stream, and otherwise never sees the reconnection
//! machinery. No failure crosses the public API as an error value; every
//! failure arrives as a [`ChannelEvent::Error`].

pub mod connection;
pub mod error;
pub mod event;
pub mod message;
pub mod transport;

pub use connection::client::RealtimeClient;
pub use connection::state::ConnectionState;
pub use error::RealtimeError;
pub use event::ChannelEvent;
pub use message::types::{ClientMessage, PushMessage};
