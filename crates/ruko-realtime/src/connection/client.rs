//! Public handle for one push channel.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::{mpsc, watch};

use ruko_core::config::realtime::RealtimeConfig;

use super::driver::Driver;
use super::state::ConnectionState;
use crate::event::ChannelEvent;
use crate::message::types::ClientMessage;
use crate::transport::{Connector, WsConnector};

/// Commands the handle posts to its driver task.
#[derive(Debug)]
pub(crate) enum Command {
    Connect,
    Send(ClientMessage),
    Close,
}

/// A client for one logical push channel.
///
/// Instantiated once per channel (one per active ride, one per on-duty
/// driver). The endpoint is resolved at construction and immutable for the
/// instance's lifetime. All methods are non-blocking and infallible: they
/// post commands to the driver task that owns the state machine, and every
/// outcome is reported through the event receiver returned at construction.
///
/// A closed client is terminal. [`close`](Self::close) permanently disables
/// reconnection; to reconnect, construct a new client.
#[derive(Debug)]
pub struct RealtimeClient {
    commands: mpsc::UnboundedSender<Command>,
    state: watch::Receiver<ConnectionState>,
    closed: AtomicBool,
}

impl RealtimeClient {
    /// Create a client for `endpoint` using the production WebSocket
    /// transport. Returns the handle and the channel's event stream.
    pub fn new(
        endpoint: impl Into<String>,
        config: RealtimeConfig,
    ) -> (Self, mpsc::UnboundedReceiver<ChannelEvent>) {
        Self::with_connector(endpoint, config, WsConnector)
    }

    /// Create a client over a custom transport connector.
    pub fn with_connector<C: Connector>(
        endpoint: impl Into<String>,
        config: RealtimeConfig,
        connector: C,
    ) -> (Self, mpsc::UnboundedReceiver<ChannelEvent>) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(ConnectionState::Closed);

        let driver = Driver::new(endpoint.into(), config, connector, command_rx, event_tx, state_tx);
        tokio::spawn(driver.run());

        let client = Self {
            commands: command_tx,
            state: state_rx,
            closed: AtomicBool::new(false),
        };
        (client, event_rx)
    }

    /// Start the channel. A no-op while already connecting or open, and
    /// after [`close`](Self::close).
    pub fn connect(&self) {
        if self.closed.load(Ordering::SeqCst) {
            return;
        }
        let _ = self.commands.send(Command::Connect);
    }

    /// Send a message. Transmitted immediately while open; otherwise queued
    /// and delivered, in original order, the next time the channel opens.
    /// Never fails for a disconnected channel.
    pub fn send(&self, message: ClientMessage) {
        if self.closed.load(Ordering::SeqCst) {
            return;
        }
        let _ = self.commands.send(Command::Send(message));
    }

    /// Close the channel: cancel any pending reconnect and keepalive, close
    /// the transport, and drop queued messages. Idempotent and terminal.
    pub fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        let _ = self.commands.send(Command::Close);
    }

    /// True iff the channel is currently open.
    pub fn is_connected(&self) -> bool {
        !self.closed.load(Ordering::SeqCst) && self.state.borrow().is_open()
    }

    /// Current connection state.
    pub fn state(&self) -> ConnectionState {
        *self.state.borrow()
    }
}
