//! Board Handlers Module
//!
//! # Handlers
//!
//! - **`post_entry`** - POST /entry - create and broadcast an entry
//! - **`list_entries`** - GET /entry - list entries in creation order
//! - **`post_reply`** - POST /reply - reply to an entry

/// Request and response types
pub mod types;

/// Entry handlers
pub mod entry;

/// Reply handler
pub mod reply;

pub use entry::{list_entries, post_entry, publish_entry};
pub use reply::post_reply;
pub use types::{EntryParams, EntrySummary, ReplyParams};
