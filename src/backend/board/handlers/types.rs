/**
 * Board Handler Types
 *
 * Request bodies for the entry and reply routes, with their declared field
 * shapes, plus the list response item.
 */

use serde::{Deserialize, Serialize};

use crate::backend::board::entries::Entry;
use crate::backend::middleware::strong_params::{DeclaredParams, FieldKind};

/// Body of `POST /entry` and of every live-channel frame
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct EntryParams {
    pub message: String,
    /// Author handle
    pub username: String,
}

impl DeclaredParams for EntryParams {
    const FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("message", FieldKind::String),
        ("username", FieldKind::String),
    ];
}

/// Body of `POST /reply`
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ReplyParams {
    pub message: String,
    #[serde(rename = "entryID")]
    pub entry_id: String,
    pub username: String,
}

impl DeclaredParams for ReplyParams {
    const FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("message", FieldKind::String),
        ("entryID", FieldKind::String),
        ("username", FieldKind::String),
    ];
}

/// One item of `GET /entry`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EntrySummary {
    pub message: String,
    pub username: String,
}

impl From<Entry> for EntrySummary {
    fn from(entry: Entry) -> Self {
        Self {
            message: entry.message,
            username: entry.username,
        }
    }
}
