//! The per-channel driver task.
//!
//! Every state transition, timer firing, and transport callback for one
//! channel happens inside this task, so transitions never overlap and no
//! locking is needed. The reconnect sleep and the keepalive interval are
//! futures owned by the loop; leaving the state that needs them drops them,
//! which cancels them.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant};
use tracing::{debug, info, warn};

use ruko_core::config::realtime::RealtimeConfig;

use super::backoff::ReconnectBackoff;
use super::client::Command;
use super::queue::OutboundQueue;
use super::state::ConnectionState;
use crate::error::RealtimeError;
use crate::event::ChannelEvent;
use crate::message::serializer;
use crate::message::types::ClientMessage;
use crate::transport::{Connector, Transport};

/// Why an open session ended.
enum SessionEnd {
    /// The peer closed or the transport failed; reconnection may follow.
    Dropped,
    /// The caller closed the channel.
    Intentional,
    /// The caller dropped the handle.
    HandleGone,
}

pub(crate) struct Driver<C: Connector> {
    endpoint: String,
    config: RealtimeConfig,
    connector: C,
    commands: mpsc::UnboundedReceiver<Command>,
    events: mpsc::UnboundedSender<ChannelEvent>,
    state: watch::Sender<ConnectionState>,
    queue: OutboundQueue,
    backoff: ReconnectBackoff,
}

impl<C: Connector> Driver<C> {
    pub(crate) fn new(
        endpoint: String,
        config: RealtimeConfig,
        connector: C,
        commands: mpsc::UnboundedReceiver<Command>,
        events: mpsc::UnboundedSender<ChannelEvent>,
        state: watch::Sender<ConnectionState>,
    ) -> Self {
        let backoff = ReconnectBackoff::new(config.reconnect_interval(), config.max_reconnect_attempts);
        Self {
            endpoint,
            config,
            connector,
            commands,
            events,
            state,
            queue: OutboundQueue::default(),
            backoff,
        }
    }

    /// Run the channel to completion.
    pub(crate) async fn run(mut self) {
        // Closed until the caller asks to connect. Sends are queued.
        loop {
            match self.commands.recv().await {
                None => return,
                Some(Command::Send(message)) => self.queue.push(message),
                Some(Command::Connect) => break,
                Some(Command::Close) => {
                    self.teardown();
                    return;
                }
            }
        }

        loop {
            self.set_state(ConnectionState::Connecting);
            debug!(endpoint = %self.endpoint, "Opening push channel");

            match self.connector.connect(&self.endpoint).await {
                Ok(transport) => match self.drive_open(transport).await {
                    SessionEnd::Dropped => {}
                    SessionEnd::Intentional => {
                        self.teardown();
                        return;
                    }
                    SessionEnd::HandleGone => return,
                },
                Err(err) => {
                    warn!(endpoint = %self.endpoint, error = %err, "Failed to open push channel");
                    self.emit(ChannelEvent::Error(RealtimeError::Connect(err)));
                }
            }

            // Unexpected close or failed open.
            self.set_state(ConnectionState::Closed);
            self.emit(ChannelEvent::Closed);

            let Some(delay) = self.backoff.next_delay() else {
                warn!(
                    endpoint = %self.endpoint,
                    attempts = self.backoff.attempts(),
                    "Reconnect budget exhausted, giving up"
                );
                self.emit(ChannelEvent::Error(RealtimeError::ReconnectExhausted {
                    attempts: self.backoff.attempts(),
                }));
                return;
            };

            info!(
                endpoint = %self.endpoint,
                attempt = self.backoff.attempts(),
                max = self.config.max_reconnect_attempts,
                delay_ms = delay.as_millis() as u64,
                "Scheduling reconnect"
            );

            if !self.wait_reconnect(delay).await {
                return;
            }
        }
    }

    /// Drive one open session until it ends.
    async fn drive_open(&mut self, mut transport: C::Transport) -> SessionEnd {
        self.backoff.reset();
        self.set_state(ConnectionState::Open);
        info!(endpoint = %self.endpoint, "Push channel open");

        // Deliver everything queued while disconnected, oldest first.
        while let Some(message) = self.queue.pop() {
            let Some(text) = self.encode(&message) else { continue };
            if let Err(err) = transport.send(text).await {
                self.queue.requeue_front(message);
                self.emit(ChannelEvent::Error(RealtimeError::Transport(err)));
                return SessionEnd::Dropped;
            }
        }

        self.emit(ChannelEvent::Opened);

        // First pulse one full interval after open, so a reopen flushes the
        // queue before any heartbeat.
        let ping_interval = self.config.ping_interval();
        let mut keepalive = time::interval_at(Instant::now() + ping_interval, ping_interval);

        loop {
            tokio::select! {
                biased;

                command = self.commands.recv() => match command {
                    None => {
                        transport.close().await;
                        return SessionEnd::HandleGone;
                    }
                    Some(Command::Connect) => {
                        debug!(endpoint = %self.endpoint, "Channel already open, ignoring connect");
                    }
                    Some(Command::Send(message)) => {
                        let Some(text) = self.encode(&message) else { continue };
                        if let Err(err) = transport.send(text).await {
                            self.queue.requeue_front(message);
                            self.emit(ChannelEvent::Error(RealtimeError::Transport(err)));
                            return SessionEnd::Dropped;
                        }
                    }
                    Some(Command::Close) => {
                        self.set_state(ConnectionState::Closing);
                        transport.close().await;
                        return SessionEnd::Intentional;
                    }
                },

                _ = keepalive.tick() => {
                    let Some(text) = self.encode(&ClientMessage::Ping) else { continue };
                    if let Err(err) = transport.send(text).await {
                        self.emit(ChannelEvent::Error(RealtimeError::Transport(err)));
                        return SessionEnd::Dropped;
                    }
                }

                incoming = transport.recv() => match incoming {
                    None => {
                        debug!(endpoint = %self.endpoint, "Push channel closed by peer");
                        return SessionEnd::Dropped;
                    }
                    Some(Ok(text)) => {
                        self.emit(ChannelEvent::Message(serializer::decode_push(&text)));
                    }
                    Some(Err(err)) => {
                        // The close that follows drives the state change.
                        self.emit(ChannelEvent::Error(RealtimeError::Transport(err)));
                    }
                },
            }
        }
    }

    /// Wait out the reconnect delay while still accepting commands.
    /// Returns false when the channel was closed or the handle dropped.
    async fn wait_reconnect(&mut self, delay: Duration) -> bool {
        let reconnect_at = Instant::now() + delay;
        loop {
            tokio::select! {
                biased;

                command = self.commands.recv() => match command {
                    None => return false,
                    Some(Command::Send(message)) => self.queue.push(message),
                    // A reconnect is already scheduled.
                    Some(Command::Connect) => {}
                    Some(Command::Close) => {
                        self.teardown();
                        return false;
                    }
                },

                () = time::sleep_until(reconnect_at) => return true,
            }
        }
    }

    /// Intentional close: drop queued state, settle in `Closed`, emit the
    /// final close notification.
    fn teardown(&mut self) {
        self.queue.clear();
        self.set_state(ConnectionState::Closed);
        self.emit(ChannelEvent::Closed);
        info!(endpoint = %self.endpoint, "Push channel closed");
    }

    fn encode(&self, message: &ClientMessage) -> Option<String> {
        match serializer::encode_client(message) {
            Ok(text) => Some(text),
            Err(err) => {
                warn!(error = %err, "Dropping unencodable outbound message");
                self.emit(ChannelEvent::Error(RealtimeError::Encode(err)));
                None
            }
        }
    }

    fn emit(&self, event: ChannelEvent) {
        let _ = self.events.send(event);
    }

    fn set_state(&self, state: ConnectionState) {
        let _ = self.state.send(state);
    }
}
