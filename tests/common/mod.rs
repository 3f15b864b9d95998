//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - An in-memory application fixture
//! - Request builders and body readers
//! - Account and session helpers

pub mod app;

pub use app::*;
pub use auth_helpers::*;
