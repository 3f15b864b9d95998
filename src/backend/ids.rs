/**
 * Object Identifiers
 *
 * Records are keyed by 24-character lowercase hex ids laid out like
 * document-store object ids: 4 bytes of unix seconds, 5 random bytes fixed
 * per process, and a 3-byte wrapping counter.
 */

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;

/// Width of every stored identifier
pub const OBJECT_ID_LEN: usize = 24;

static PROCESS_RANDOM: OnceLock<[u8; 5]> = OnceLock::new();
static COUNTER: OnceLock<AtomicU32> = OnceLock::new();

/// Generate a new 24-character hex identifier
pub fn new_object_id() -> String {
    let seconds = chrono::Utc::now().timestamp() as u32;
    let random = PROCESS_RANDOM.get_or_init(rand::random::<[u8; 5]>);
    let counter = COUNTER
        .get_or_init(|| AtomicU32::new(rand::random::<u32>()))
        .fetch_add(1, Ordering::Relaxed)
        & 0x00ff_ffff;

    let mut bytes = [0u8; 12];
    bytes[..4].copy_from_slice(&seconds.to_be_bytes());
    bytes[4..9].copy_from_slice(random);
    bytes[9..].copy_from_slice(&counter.to_be_bytes()[1..]);

    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
