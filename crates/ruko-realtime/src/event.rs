//! Events emitted by a push channel toward its owner.

use crate::error::RealtimeError;
use crate::message::types::PushMessage;

/// A channel lifecycle or delivery event.
///
/// Exactly one event is emitted per transition: one [`Opened`](Self::Opened)
/// per successful open, one [`Closed`](Self::Closed) per close, one
/// [`Message`](Self::Message) per inbound payload. The caller receives these
/// through the receiver returned at construction and reacts from its own
/// task; the channel never calls back into caller code.
#[derive(Debug)]
pub enum ChannelEvent {
    /// The channel is open; queued messages have already been flushed.
    Opened,
    /// An inbound payload arrived. Payloads that do not decode are still
    /// delivered, as [`PushMessage::Unknown`].
    Message(PushMessage),
    /// A failure occurred. The channel keeps recovering on its own unless
    /// the error is [`RealtimeError::ReconnectExhausted`], which is terminal.
    Error(RealtimeError),
    /// The channel closed, expectedly or not. Unless the close was
    /// intentional or terminal, a reconnect is already scheduled.
    Closed,
}
