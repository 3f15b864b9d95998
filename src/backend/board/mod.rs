//! Board Module
//!
//! Entries, replies, and the HTTP handlers that create and list them.
//!
//! # Module Structure
//!
//! ```text
//! board/
//! ├── mod.rs          - Module exports and documentation
//! ├── entries.rs      - Entry model, validation and queries
//! ├── replies.rs      - Reply model, validation and queries
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── entry.rs    - Post and list entries
//!     └── reply.rs    - Post reply
//! ```

/// Entry model and queries
pub mod entries;

/// Reply model and queries
pub mod replies;

/// HTTP handlers for board endpoints
pub mod handlers;

pub use entries::Entry;
pub use handlers::{list_entries, post_entry, post_reply};
pub use replies::Reply;
