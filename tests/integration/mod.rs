//! Integration tests
//!
//! Drive the full router against an in-memory database.

mod auth_test;
mod live_test;
