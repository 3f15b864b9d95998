/**
 * Live Socket Handler
 *
 * `GET /live` upgrades to a WebSocket. Each socket is both a listener and a
 * poster:
 *
 * - every entry broadcast after the socket opened is sent to it as JSON
 *   `{_id, message, username, likes}`
 * - every text frame it sends is treated like a `POST /entry` body; valid
 *   frames create and broadcast an entry (the sender gets it too), invalid
 *   ones are dropped with a log line and no reply
 *
 * # Connection Management
 *
 * - The socket subscribes to the broadcast when the upgrade request arrives
 * - Lagged listeners skip the entries they missed and keep going
 * - When either direction ends, the other is stopped
 */

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::sync::broadcast::{self, error::RecvError};

use crate::backend::board::entries::Entry;
use crate::backend::board::handlers::{publish_entry, EntryParams};
use crate::backend::middleware::strong_params::{check_shape, DeclaredParams};
use crate::backend::server::state::AppState;

/// Handle live socket upgrade (GET /live)
pub async fn live_socket(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    let rx = state.entry_broadcast.subscribe();
    tracing::info!("[Live] Listener connecting");
    ws.on_upgrade(move |socket| handle_socket(socket, state, rx))
}

async fn handle_socket(socket: WebSocket, state: AppState, mut rx: broadcast::Receiver<Entry>) {
    let (mut sender, mut receiver) = socket.split();

    let mut send_task = tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(entry) => {
                    let text = match serde_json::to_string(&entry) {
                        Ok(text) => text,
                        Err(e) => {
                            tracing::error!("[Live] Failed to serialize entry: {:?}", e);
                            continue;
                        }
                    };
                    if sender.send(Message::Text(text.into())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("[Live] Listener lagged, skipped {} entries", skipped);
                    continue;
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(message)) = receiver.next().await {
            match message {
                Message::Text(text) => {
                    handle_frame(&state, text.as_str()).await;
                }
                Message::Close(_) => break,
                _ => {}
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    tracing::info!("[Live] Listener disconnected");
}

/// Parse one inbound frame into entry fields
///
/// Frames go through the same shape check as `POST /entry`.
pub fn parse_frame(text: &str) -> Option<EntryParams> {
    let payload: Value = match serde_json::from_str(text) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!("[Live] Dropping frame that is not JSON: {}", e);
            return None;
        }
    };

    let sanitized = match check_shape(EntryParams::FIELDS, payload) {
        Ok(sanitized) => sanitized,
        Err(e) => {
            tracing::warn!("[Live] Dropping frame: {}", e);
            return None;
        }
    };

    serde_json::from_value(Value::Object(sanitized)).ok()
}

/// Create and broadcast the entry described by one inbound frame
///
/// Returns the created entry, or `None` if the frame was dropped.
pub async fn handle_frame(state: &AppState, text: &str) -> Option<Entry> {
    let params = parse_frame(text)?;

    match publish_entry(&state.db, &state.entry_broadcast, params).await {
        Ok(entry) => Some(entry),
        Err(e) => {
            tracing::warn!("[Live] Post could not be made: {}", e);
            None
        }
    }
}
