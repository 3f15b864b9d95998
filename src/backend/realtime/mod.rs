//! Live Update Module
//!
//! Fan-out of newly created entries to every connected WebSocket listener.
//!
//! # Architecture
//!
//! - **`broadcast`** - Entry broadcast channel type and send helper
//! - **`socket`** - `GET /live` WebSocket handler
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── broadcast.rs    - Entry broadcasting
//! └── socket.rs       - WebSocket handler
//! ```
//!
//! # Delivery
//!
//! Delivery is best-effort: listeners only see entries created while they
//! are connected, a lagging listener skips what it missed, and nothing is
//! retried or acknowledged.

/// Entry broadcasting
pub mod broadcast;

/// WebSocket handler
pub mod socket;

pub use broadcast::{broadcast_entry, EntryBroadcast};
pub use socket::live_socket;
