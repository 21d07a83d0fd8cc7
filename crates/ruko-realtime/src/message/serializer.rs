//! JSON serialization for push channel messages.

use super::types::{ClientMessage, PushMessage};

/// Serialize an outbound client message to JSON.
pub fn encode_client(message: &ClientMessage) -> Result<String, serde_json::Error> {
    serde_json::to_string(message)
}

/// Decode an inbound push payload; payloads that do not decode are
/// preserved raw.
pub fn decode_push(text: &str) -> PushMessage {
    PushMessage::decode(text)
}
