//! Live channel integration tests
//!
//! Most tests feed frames to the same handler the WebSocket uses and listen
//! on plain broadcast receivers. The socket tests connect to `/live` over a
//! real local connection.

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use pretty_assertions::assert_eq;
use serde_json::Value;
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};

use postboard::backend::realtime::socket::handle_frame;

use crate::common::*;

#[tokio::test]
async fn test_frame_creates_and_broadcasts_entry() {
    let app = TestApp::new().await;
    register(&app, &ROB).await;
    let mut first = app.state.entry_broadcast.subscribe();
    let mut second = app.state.entry_broadcast.subscribe();

    let entry = handle_frame(&app.state, r#"{"message":"from socket","username":"rob"}"#)
        .await
        .unwrap();

    assert_eq!(first.recv().await.unwrap(), entry);
    assert_eq!(second.recv().await.unwrap(), entry);

    let wire = serde_json::to_value(&entry).unwrap();
    assert_eq!(wire["_id"], entry.id);
    assert_eq!(wire["message"], "from socket");
    assert_eq!(wire["username"], "rob");
    assert_eq!(wire["likes"], 0);

    let listed = body_json(app.get("/entry", None).await).await;
    assert_eq!(listed[0]["message"], "from socket");
}

#[tokio::test]
async fn test_invalid_frames_are_dropped() {
    let app = TestApp::new().await;
    register(&app, &ROB).await;
    let mut listener = app.state.entry_broadcast.subscribe();

    for frame in [
        "not json",
        r#"{"message":"hi"}"#,
        r#"{"message":"hi","username":7}"#,
        r#"{"message":"","username":"rob"}"#,
        r#"{"message":"hi","username":"ghost"}"#,
    ] {
        assert!(handle_frame(&app.state, frame).await.is_none(), "{}", frame);
    }

    assert!(listener.try_recv().is_err());
    let listed = body_json(app.get("/entry", None).await).await;
    assert_eq!(listed.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_late_listener_misses_earlier_entries() {
    let app = TestApp::new().await;
    register(&app, &ROB).await;

    handle_frame(&app.state, r#"{"message":"early","username":"rob"}"#)
        .await
        .unwrap();

    let mut late = app.state.entry_broadcast.subscribe();
    handle_frame(&app.state, r#"{"message":"later","username":"rob"}"#)
        .await
        .unwrap();

    assert_eq!(late.recv().await.unwrap().message, "later");
}

type Client = WebSocketStream<MaybeTlsStream<TcpStream>>;

async fn connect_live(addr: std::net::SocketAddr) -> Client {
    let (client, _) = connect_async(format!("ws://{}/live", addr))
        .await
        .expect("Failed to open live socket");
    client
}

/// Next text frame as JSON, skipping control frames
async fn next_entry(client: &mut Client) -> Value {
    loop {
        let message = tokio::time::timeout(Duration::from_secs(5), client.next())
            .await
            .expect("Timed out waiting for a frame")
            .expect("Socket closed")
            .expect("Socket error");
        if let Message::Text(text) = message {
            return serde_json::from_str(text.as_str()).expect("Frame is not JSON");
        }
    }
}

#[tokio::test]
async fn test_socket_frame_reaches_every_listener() {
    let app = TestApp::new().await;
    register(&app, &ROB).await;
    let addr = app.serve().await;

    let mut poster = connect_live(addr).await;
    let mut watcher = connect_live(addr).await;

    poster
        .send(Message::text(r#"{"message":"over the wire","username":"rob"}"#))
        .await
        .unwrap();

    let seen_by_poster = next_entry(&mut poster).await;
    let seen_by_watcher = next_entry(&mut watcher).await;
    assert_eq!(seen_by_poster, seen_by_watcher);
    assert_eq!(seen_by_watcher["message"], "over the wire");
    assert_eq!(seen_by_watcher["username"], "rob");
    assert_eq!(seen_by_watcher["likes"], 0);
    assert_eq!(seen_by_watcher["_id"].as_str().unwrap().len(), 24);

    let listed = body_json(app.get("/entry", None).await).await;
    assert_eq!(listed[0]["message"], "over the wire");
}

#[tokio::test]
async fn test_socket_drops_bad_frames_and_keeps_going() {
    let app = TestApp::new().await;
    register(&app, &ROB).await;
    let addr = app.serve().await;

    let mut client = connect_live(addr).await;
    client.send(Message::text("not json")).await.unwrap();
    client
        .send(Message::text(r#"{"message":"hi","username":{"$ne":""}}"#))
        .await
        .unwrap();
    client
        .send(Message::text(r#"{"message":"still here","username":"rob"}"#))
        .await
        .unwrap();

    let entry = next_entry(&mut client).await;
    assert_eq!(entry["message"], "still here");
}

#[tokio::test]
async fn test_socket_receives_http_posted_entries() {
    let app = TestApp::new().await;
    register(&app, &ROB).await;
    let addr = app.serve().await;

    let mut client = connect_live(addr).await;
    let response = app
        .post_json("/entry", serde_json::json!({"message": "via http", "username": "rob"}))
        .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);

    let entry = next_entry(&mut client).await;
    assert_eq!(entry["message"], "via http");

    let _ = client.close(None).await;
}
