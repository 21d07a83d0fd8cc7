//! Keepalive pulses: fixed cadence while open, stopped on any exit from
//! the open state.

mod common;

use std::time::Duration;

use ruko_realtime::{ChannelEvent, RealtimeClient};

use common::{FakeConnector, next_event, next_outgoing, next_peer, test_config};

const ENDPOINT: &str = "ws://localhost:8000/ws/driver/7/?token=test";

#[tokio::test(start_paused = true)]
async fn test_ping_cadence_while_open() {
    let (connector, mut peers) = FakeConnector::new(vec![]);
    let (client, mut events) =
        RealtimeClient::with_connector(ENDPOINT, test_config(3, 1000), connector);

    client.connect();
    assert!(matches!(next_event(&mut events).await, ChannelEvent::Opened));
    let mut peer = next_peer(&mut peers).await;

    // The first pulse comes one full interval after the open, not at open.
    assert!(
        tokio::time::timeout(Duration::from_secs(29), peer.from_client.recv())
            .await
            .is_err()
    );
    assert_eq!(next_outgoing(&mut peer).await, r#"{"type":"ping"}"#);
    assert_eq!(next_outgoing(&mut peer).await, r#"{"type":"ping"}"#);
}

#[tokio::test(start_paused = true)]
async fn test_no_ping_after_close() {
    let (connector, mut peers) = FakeConnector::new(vec![]);
    let (client, mut events) =
        RealtimeClient::with_connector(ENDPOINT, test_config(3, 1000), connector);

    client.connect();
    assert!(matches!(next_event(&mut events).await, ChannelEvent::Opened));
    let mut peer = next_peer(&mut peers).await;

    client.close();
    assert!(matches!(next_event(&mut events).await, ChannelEvent::Closed));

    // The transport drops without a single pulse having been sent.
    match tokio::time::timeout(Duration::from_secs(600), peer.from_client.recv()).await {
        Ok(None) => {}
        other => panic!("expected the transport to be gone, got {other:?}"),
    }
}
