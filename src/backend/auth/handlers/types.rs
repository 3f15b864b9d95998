/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the account
 * handlers. Request types declare their field shapes for the
 * `StrongParams` extractor; wire names are camelCase.
 */

use serde::{Deserialize, Serialize};

use crate::backend::middleware::strong_params::{DeclaredParams, FieldKind};

/// Register request
#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RegisterParams {
    pub username: String,
    /// Plain credential, hashed before storage
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl DeclaredParams for RegisterParams {
    const FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("username", FieldKind::String),
        ("password", FieldKind::String),
        ("email", FieldKind::String),
        ("firstName", FieldKind::String),
        ("lastName", FieldKind::String),
    ];
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginParams {
    pub email: String,
    /// Verified against the stored hash
    pub password: String,
}

impl DeclaredParams for LoginParams {
    const FIELDS: &'static [(&'static str, FieldKind)] = &[
        ("email", FieldKind::String),
        ("password", FieldKind::String),
    ];
}

/// Register response
///
/// Contains account information that is safe to return to clients.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RegisterResponse {
    pub email: String,
    pub username: String,
    /// Display name, `firstName lastName`
    pub name: String,
}

/// Login response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    pub name: String,
    pub username: String,
}
