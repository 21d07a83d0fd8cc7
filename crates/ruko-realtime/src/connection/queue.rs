//! Outbound message queue.

use std::collections::VecDeque;

use crate::message::types::ClientMessage;

/// Ordered buffer of messages awaiting transmission while the channel is
/// not open.
///
/// Insertion order is send order. The queue is unbounded and cleared only on
/// intentional close; everything still pending when the channel reopens is
/// flushed before any newer send.
#[derive(Debug, Default)]
pub struct OutboundQueue {
    pending: VecDeque<ClientMessage>,
}

impl OutboundQueue {
    /// Append a message to the back of the queue.
    pub fn push(&mut self, message: ClientMessage) {
        self.pending.push_back(message);
    }

    /// Take the oldest pending message.
    pub fn pop(&mut self) -> Option<ClientMessage> {
        self.pending.pop_front()
    }

    /// Put a message back at the front after an interrupted flush, so the
    /// original order survives a second outage.
    pub fn requeue_front(&mut self, message: ClientMessage) {
        self.pending.push_front(message);
    }

    /// Drop everything pending.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Number of pending messages.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
