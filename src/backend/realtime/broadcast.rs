/**
 * Live Entry Broadcasting
 *
 * Newly created entries are sent on a `tokio::sync::broadcast` channel.
 * Every open live socket holds a receiver, so each one gets its own copy.
 * A send with no receivers is not an error; the entry is simply not seen
 * by anyone.
 */

use tokio::sync::broadcast;

use crate::backend::board::entries::Entry;

/// Sender side of the live entry channel
///
/// Cloned into handlers through `FromRef`; every clone feeds the same
/// receivers.
pub type EntryBroadcast = broadcast::Sender<Entry>;

/// Broadcast a created entry to every current listener
///
/// # Returns
///
/// Number of listeners that will receive the entry (0 if none)
pub fn broadcast_entry(broadcast_tx: &EntryBroadcast, entry: Entry) -> usize {
    match broadcast_tx.send(entry) {
        Ok(subscriber_count) => {
            tracing::debug!("[Live] Entry broadcast to {} listeners", subscriber_count);
            subscriber_count
        }
        Err(_) => {
            tracing::debug!("[Live] No listeners for entry");
            0
        }
    }
}
